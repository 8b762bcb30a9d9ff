pub mod shared {
    pub mod infrastructure {
        pub mod http {
            pub mod error;
            pub mod json_body;
        }
        pub mod id_generator;
    }
}

pub mod modules {
    pub mod calendar_events {
        pub mod core {
            pub mod event;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
