use super::*;

#[test]
fn current_user_endpoint_matches_server_route() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/auth/me");
}
