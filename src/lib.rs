pub mod shared {
    pub mod config;
    pub mod telemetry;
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod register_request;
            pub mod role;
        }
        pub mod use_cases {
            pub mod generate_user {
                pub mod builder;
                pub mod generator;
            }
            pub mod sign_up {
                pub mod client;
                pub mod error;
                pub mod response;
            }
        }
    }
}

pub mod shell;
