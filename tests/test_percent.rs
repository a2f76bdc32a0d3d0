use docroot::percent::decode;

#[test]
fn test_decode_spaces() {
    assert_eq!(decode("page%20with%20space.html"), "page with space.html");
}

#[test]
fn test_decode_colon_and_slash() {
    assert_eq!(decode("a%3Ab%2Fc"), "a:b/c");
}

#[test]
fn test_decode_leaves_other_escapes_alone() {
    assert_eq!(decode("x%21y%2fz"), "x%21y%2fz");
}

#[test]
fn test_decode_is_single_pass_per_escape() {
    // "%2520" becomes "%20" on the first pass only
    let once = decode("a%2520b");
    assert_eq!(once, "a%20b");
    assert_eq!(decode(&once), "a b");
    assert_eq!(decode(&decode(&once)), "a b");
}
