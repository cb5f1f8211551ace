use super::*;

fn post(id: &str, author: &str, content: &str, address: &str) -> PostRecord {
    PostRecord {
        id: id.to_owned(),
        content: content.to_owned(),
        address: address.to_owned(),
        author: author.to_owned(),
        image: String::new(),
        likes: vec![],
        comments: vec![],
        created: String::new(),
    }
}

#[test]
fn post_matches_content_and_address() {
    let p = post("p1", "u1", "Hello from the corner", "Lagos, Nigeria");
    assert!(post_matches(&p, "corner"));
    assert!(post_matches(&p, "lagos"));
    assert!(!post_matches(&p, "abuja"));
}

#[test]
fn post_matches_is_case_insensitive_and_empty_matches_all() {
    let p = post("p1", "u1", "Hello", "");
    assert!(post_matches(&p, "HELLO"));
    assert!(post_matches(&p, ""));
}

#[test]
fn unique_author_ids_dedupes_in_first_seen_order() {
    let posts = vec![
        post("p1", "u2", "", ""),
        post("p2", "u1", "", ""),
        post("p3", "u2", "", ""),
        post("p4", "", "", ""),
    ];
    assert_eq!(unique_author_ids(&posts), vec!["u2".to_owned(), "u1".to_owned()]);
}

#[test]
fn author_name_falls_back_to_the_raw_id() {
    let mut authors = HashMap::new();
    assert_eq!(author_name(&authors, "u1"), "u1");

    authors.insert(
        "u1".to_owned(),
        UserRecord {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            username: String::new(),
            email: String::new(),
            avatar: String::new(),
            verified: false,
            created: String::new(),
            pri_location: None,
            followers: vec![],
            posts: vec![],
        },
    );
    assert_eq!(author_name(&authors, "u1"), "Alice");
}
