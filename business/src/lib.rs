pub mod application {
    pub mod basket {
        pub mod create;
        pub mod get_all;
        pub mod update;
    }
    pub mod inflation_report {
        pub mod get_all;
    }
    pub mod item {
        pub mod create;
        pub mod get_all;
        pub mod update;
    }
    pub mod price_alert {
        pub mod create;
        pub mod get_all;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_uuid;
        pub mod update;
        pub mod update_item;
    }
    pub mod store {
        pub mod create;
        pub mod get_all;
        pub mod update;
    }
    pub mod user_preferences {
        pub mod get;
        pub mod reset;
        pub mod set_preferred_stores;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod security;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod inflation_report {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod price_alert {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_uuid;
            pub mod update;
            pub mod update_item;
        }
    }
    pub mod store {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod user_preferences {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get;
            pub mod reset;
            pub mod set_preferred_stores;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
