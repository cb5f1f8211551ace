use super::*;

#[test]
fn auth_endpoint_targets_admin_auth() {
    assert_eq!(
        auth_endpoint(),
        format!("{}/admins/auth-with-password", api_base())
    );
}

#[test]
fn records_endpoint_carries_paging_query() {
    assert_eq!(
        records_endpoint("users", 2, 10),
        format!("{}/collections/users/records?perPage=10&page=2", api_base())
    );
}

#[test]
fn record_endpoint_addresses_single_record() {
    assert_eq!(
        record_endpoint("users", "u1"),
        format!("{}/collections/users/records/u1", api_base())
    );
}

#[test]
fn avatar_url_uses_auth_files_bucket() {
    assert_eq!(
        avatar_url("u1", "pic.png"),
        format!("{}/files/_pb_users_auth_/u1/pic.png", api_base())
    );
}

#[test]
fn bearer_prefixes_the_token() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message(401), "request failed: 401");
}
