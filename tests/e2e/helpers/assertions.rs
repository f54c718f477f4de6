use autothumb_backend::domain::catalog::ProductId;
use autothumb_backend::domain::thumbnail::ResolutionResult;

pub fn assert_img_src(html: &str, expected_src: &str) {
    let needle = format!(r#"src="{}""#, expected_src);
    assert!(
        html.starts_with("<img ") && html.contains(&needle),
        "Expected an <img> with {} but got '{}'",
        needle,
        html
    );
}

pub fn assert_product_image(resolution: &ResolutionResult, product_id: i64, size: &str) {
    assert_eq!(
        resolution,
        &ResolutionResult::UseProductImage {
            product_id: ProductId(product_id),
            size: size.to_string(),
        }
    );
}

/// Id of the product picked, if any
pub fn picked_product(resolution: &ResolutionResult) -> Option<i64> {
    match resolution {
        ResolutionResult::UseProductImage { product_id, .. } => Some(product_id.0),
        ResolutionResult::UseDefaultRendering => None,
    }
}
