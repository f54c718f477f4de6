use crate::domain::settings::SettingsStore;
use crate::error::AppResult;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.values.read().get(name).cloned()
    }

    pub fn put(&self, name: &str, value: &str) {
        self.values
            .write()
            .insert(name.to_string(), value.to_string());
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_setting(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.get(name))
    }

    async fn set_setting(&self, name: &str, value: &str) -> AppResult<()> {
        self.put(name, value);
        Ok(())
    }

    async fn insert_setting_if_absent(&self, name: &str, value: &str) -> AppResult<bool> {
        let mut values = self.values.write();
        if values.contains_key(name) {
            return Ok(false);
        }
        values.insert(name.to_string(), value.to_string());
        Ok(true)
    }
}
