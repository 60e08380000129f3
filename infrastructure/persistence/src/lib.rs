pub mod db;
pub mod basket {
    pub mod entity;
    pub mod repository;
}
pub mod inflation_report {
    pub mod entity;
    pub mod repository;
}
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod price_alert {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
pub mod store {
    pub mod entity;
    pub mod repository;
}
pub mod user_preferences {
    pub mod entity;
    pub mod repository;
}
