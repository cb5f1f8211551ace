use super::*;

#[test]
fn auth_response_deserializes() {
    let parsed: AuthResponse = serde_json::from_str(
        r#"{ "token": "tok123", "admin": { "id": "adm1", "email": "a@b.com" } }"#,
    )
    .unwrap();
    assert_eq!(parsed.token, "tok123");
    assert_eq!(parsed.admin.email, "a@b.com");
}

#[test]
fn record_page_deserializes_camel_case_envelope() {
    let parsed: RecordPage<UserRecord> = serde_json::from_str(
        r#"{
            "page": 2,
            "perPage": 10,
            "totalItems": 42,
            "totalPages": 5,
            "items": [{
                "id": "u1",
                "name": "Alice",
                "username": "alice",
                "email": "alice@example.com",
                "verified": true,
                "created": "2024-01-15 10:30:00.123Z",
                "priLocation": { "city": "Lagos", "country": "Nigeria" },
                "followers": ["u2", "u3"],
                "posts": ["p1"]
            }]
        }"#,
    )
    .unwrap();
    assert_eq!(parsed.page, 2);
    assert_eq!(parsed.per_page, 10);
    assert_eq!(parsed.total_items, 42);
    assert_eq!(parsed.total_pages, 5);
    assert_eq!(parsed.items.len(), 1);

    let user = &parsed.items[0];
    assert!(user.verified);
    assert_eq!(user.pri_location.as_ref().unwrap().city, "Lagos");
    assert_eq!(user.followers.len(), 2);
    assert_eq!(user.posts.len(), 1);
}

#[test]
fn user_record_defaults_omitted_fields() {
    let user: UserRecord = serde_json::from_str(r#"{ "id": "u1" }"#).unwrap();
    assert_eq!(user.name, "");
    assert_eq!(user.avatar, "");
    assert!(!user.verified);
    assert_eq!(user.pri_location, None);
    assert!(user.followers.is_empty());
}

#[test]
fn post_record_deserializes_with_engagement_lists() {
    let post: PostRecord = serde_json::from_str(
        r#"{
            "id": "p1",
            "content": "Hello from the corner",
            "address": "Lagos, Nigeria",
            "author": "u1",
            "likes": ["u2", "u3", "u4"],
            "comments": ["c1"],
            "created": "2024-02-01 09:00:00.000Z"
        }"#,
    )
    .unwrap();
    assert_eq!(post.author, "u1");
    assert_eq!(post.likes.len(), 3);
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.image, "");
}

#[test]
fn corner_record_defaults_members() {
    let corner: CornerRecord =
        serde_json::from_str(r#"{ "id": "c1", "name": "Catalog" }"#).unwrap();
    assert_eq!(corner.name, "Catalog");
    assert!(corner.members.is_empty());
}

#[test]
fn empty_record_page_defaults() {
    let parsed: RecordPage<PostRecord> = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.total_items, 0);
    assert!(parsed.items.is_empty());
}
