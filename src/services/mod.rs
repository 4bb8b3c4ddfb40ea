pub mod site_audit_service;

pub use site_audit_service::{
    check_environment, fetch_local_report, fetch_pagespeed_report, normalize, run_site_audit,
    IssuePolicy, MissingCategory, NormalizeOptions,
};
