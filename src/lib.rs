pub mod service {
    pub mod config_service;
    pub mod converter;
    pub mod fetch;
    pub mod markdown;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod facade {
    pub mod conversion_invoker;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod page;
}

pub mod utils {
    pub mod convert;
    pub mod output;
    pub mod utils;
}
