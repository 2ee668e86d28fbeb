//! Network acquisition: fetching the audited page and its auxiliary
//! resources.

pub mod http_client;
