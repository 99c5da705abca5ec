mod helpers;
mod test_accounts;
mod test_health;
mod test_upload_validation;
mod test_validation_errors;
