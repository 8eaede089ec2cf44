use std::env;
use std::path::PathBuf;

/// Where the cart slot lives and which catalog to serve
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub cart_storage_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_PATH: Directory holding the cart slot (default: ".storefront")
    /// - CATALOG_PATH: Catalog JSON file (default: bundled catalog)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cart_storage_path = lookup("CART_STORAGE_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| ".storefront".to_string());
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            cart_storage_path: PathBuf::from(cart_storage_path),
            catalog_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_directory_and_bundled_catalog() {
        let config = StorageConfig::from_lookup(|_| None);

        assert_eq!(config.cart_storage_path, PathBuf::from(".storefront"));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn should_read_paths_from_lookup() {
        let config = StorageConfig::from_lookup(|key| match key {
            "CART_STORAGE_PATH" => Some("/var/lib/storefront".to_string()),
            "CATALOG_PATH" => Some("/etc/storefront/catalog.json".to_string()),
            _ => None,
        });

        assert_eq!(config.cart_storage_path, PathBuf::from("/var/lib/storefront"));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/storefront/catalog.json"))
        );
    }
}
