use std::{fs::File, io::{BufReader, Write}, path::PathBuf};
use anyhow::*;
use log::{debug, info};

use crate::models::Settings;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait SettingsManager {
    fn get_or_create(&mut self) -> Result<Settings>;
    fn write(&mut self, settings: &Settings) -> Result<()>;
}

pub struct DefaultSettingsManager {
    path: PathBuf
}

impl SettingsManager for DefaultSettingsManager {
    fn get_or_create(&mut self) -> Result<Settings> {

        if self.path.exists() {
            let file = File::open(&self.path)
                .with_context(|| format!("Could not open settings: {:?}", self.path))?;
            let settings = serde_json::from_reader(BufReader::new(file))?;
            debug!("loaded settings from {:?}", self.path);
            return Ok(settings);
        }

        let settings = Settings::default();
        self.write(&settings)?;
        info!("created default settings at {:?}", self.path);

        Ok(settings)
    }

    fn write(&mut self, settings: &Settings) -> Result<()> {
        let mut file = File::create(&self.path)
            .with_context(|| format!("Could not create settings: {:?}", self.path))?;
        let json_str = serde_json::to_string_pretty(&settings)?;

        file.write_all(json_str.as_bytes())?;

        Ok(())
    }
}

impl DefaultSettingsManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}
