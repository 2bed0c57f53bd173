//! User profile repository
//!
//! The store holds a single profile in user.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::UserProfile;

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    #[serde(default)]
    user: Option<UserProfile>,
}

/// Repository for the user profile
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<Option<UserProfile>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the profile from disk
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.user;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let file_data = UserData { user: self.get()? };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the profile, if one has been stored
    pub fn get(&self) -> Result<Option<UserProfile>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the profile
    pub fn set(&self, profile: UserProfile) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = Some(profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_empty_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("user.json"));
        repo.load().unwrap();

        assert!(repo.get().unwrap().is_none());
    }

    #[test]
    fn test_set_save_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user.json");

        let repo = UserRepository::new(path.clone());
        let profile = UserProfile::new("Asha")
            .with_budget(Money::from_rupees(5000), Money::from_rupees(500));
        repo.set(profile.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = UserRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), Some(profile));
    }
}
