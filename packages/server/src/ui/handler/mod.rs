//! Handler modules for HTTP endpoints.

pub mod http;

pub use http::{
    connect_payment_method, disconnect_payment_method, get_association, get_user, health_check,
    list_payment_methods, register_user,
};
