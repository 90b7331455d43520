use ghdb_scraper::{has_domain_clause, is_domain, normalize};

#[test]
fn is_domain_accepts_registrable_names() {
    assert!(is_domain("example.com"));
    assert!(is_domain("sub.example.co.uk"));
}

#[test]
fn is_domain_rejects_non_domains() {
    assert!(!is_domain("not a domain"));
    assert!(!is_domain("localhost:8080"));
    assert!(!is_domain(""));
}

#[test]
fn normalize_strips_only_domain_bound_clause() {
    let normalized = normalize("-site:exploit-db.com inurl:admin");
    assert_eq!(normalized, " inurl:admin");
    assert_eq!(normalized.trim(), "inurl:admin");
}

#[test]
fn normalize_keeps_non_domain_argument() {
    let raw = "site:\"internal-param\" foo";
    assert_eq!(normalize(raw), raw);
}

#[test]
fn normalize_handles_real_ghdb_dorks() {
    let cases = [
        (
            "intitle:\"index of\" \"wp-config.php.bak\" -site:exploit-db.com",
            "intitle:\"index of\" \"wp-config.php.bak\" ",
        ),
        (
            "inurl:/proc/self/cwd",
            "inurl:/proc/self/cwd",
        ),
        (
            "\"Powered by phpBB\" -site:\"www.exploit-db.com\"",
            "\"Powered by phpBB\" ",
        ),
        (
            "site:gov.example.gov ext:xls intext:\"password\"",
            " ext:xls intext:\"password\"",
        ),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize(raw), expected, "raw: {raw:?}");
    }
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "-site:exploit-db.com inurl:admin",
        "site:\"internal-param\" foo",
        "intitle:\"index of\" -inurl:\"example.org\" -site:example.org",
        "site:a.com site:b.com site:c.com",
        "inurl:\"/admin/login.php\"",
        "allintext: site:",
        "-site:-site:exploit-db.com.exploit-db.com",
    ];
    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice, "input: {input:?}");
        assert!(!has_domain_clause(&once), "clause survived in {once:?}");
    }
}

#[test]
fn normalize_never_fails_on_odd_input() {
    for input in ["", " ", "site:", "-", "\"\"", "inurl:'", "site:ü.com", "日本語 site:例え.jp"] {
        let _ = normalize(input);
    }
}
