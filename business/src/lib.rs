pub mod application {
    pub mod cart {
        pub mod add;
        pub mod store;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_slug;
    }
    pub mod checkout {
        pub mod orchestrator;
    }
    pub mod stock {
        pub mod get_sheet;
        pub mod save_levels;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_slug;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod snapshot;
        pub mod storage;
        pub mod use_cases {
            pub mod add;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod shipping;
        pub mod value_objects;
    }
    pub mod stock {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_sheet;
            pub mod save_levels;
        }
    }
}

#[cfg(test)]
mod test_support;
