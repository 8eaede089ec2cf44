pub mod db;
pub mod cart_slot {
    pub mod file_storage;
}
pub mod catalog {
    pub mod static_repository;
}
pub mod stock {
    pub mod entity;
    pub mod repository;
}
