pub mod error;

pub use error::{
    handle_domain_error, invalid_credentials_response, invalid_request_response,
    token_error_response,
};
