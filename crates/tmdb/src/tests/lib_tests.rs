use super::{poster_url, search_path};

#[test]
fn search_path_without_year() {
    assert_eq!(
        search_path("Inception", None),
        "/3/search/movie?query=Inception"
    );
}

#[test]
fn search_path_with_year() {
    assert_eq!(
        search_path("Inception", Some("2010")),
        "/3/search/movie?query=Inception&year=2010"
    );
}

#[test]
fn empty_year_is_treated_as_absent() {
    assert_eq!(
        search_path("Inception", Some("")),
        search_path("Inception", None)
    );
    assert_eq!(
        search_path("Inception", Some("   ")),
        search_path("Inception", None)
    );
}

#[test]
fn title_is_url_encoded() {
    assert_eq!(
        search_path("The Good, the Bad and the Ugly", None),
        "/3/search/movie?query=The%20Good%2C%20the%20Bad%20and%20the%20Ugly"
    );
}

#[test]
fn year_is_appended_verbatim() {
    let path = search_path("Alien", Some("19 79"));
    assert!(path.ends_with("&year=19 79"));
}

#[test]
fn distinct_inputs_build_distinct_paths() {
    let a = search_path("Inception", Some("2010"));
    let b = search_path("Inception", Some("2011"));
    let c = search_path("Interstellar", Some("2010"));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn poster_url_prefixes_the_cdn_base() {
    assert_eq!(
        poster_url("/abc.jpg"),
        "https://image.tmdb.org/t/p/original/abc.jpg"
    );
}
