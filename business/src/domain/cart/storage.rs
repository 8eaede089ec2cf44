/// Fixed key of the durable slot holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "jinx_cart";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.read_failed")]
    ReadFailed,
    #[error("storage.write_failed")]
    WriteFailed,
}

/// Durable local key-value slot the cart is written to after every mutation.
///
/// Calls are synchronous: a mutation has been handed to storage by the time
/// the triggering operation returns.
pub trait CartStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
