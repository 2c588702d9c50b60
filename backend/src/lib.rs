//! Client of the CRM REST backend used by the search pages.

pub mod api;
pub mod crm_utils;
