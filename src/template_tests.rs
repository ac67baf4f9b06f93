// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `template`

#[cfg(test)]
mod tests {
    use crate::errors::TemplateError;
    use crate::layout::OutputLayout;
    use crate::request::ZoneRequest;
    use crate::template::{render, render_zone_data, render_zone_declaration};

    fn example_request(ttl: Option<i64>) -> ZoneRequest {
        ZoneRequest::new("example.com", "10.0.0.5", ttl).unwrap()
    }

    fn lookup_who(key: &str) -> Option<String> {
        (key == "WHO").then(|| "world".to_string())
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render("t", "{{WHO}} and {{WHO}}", lookup_who).unwrap();
        assert_eq!(out, "world and world");
    }

    #[test]
    fn test_render_ignores_whitespace_inside_braces() {
        let out = render("t", "hello {{ WHO }}!", lookup_who).unwrap();
        assert_eq!(out, "hello world!");
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let text = "zone \"x\" {\n};\n";
        assert_eq!(render("t", text, lookup_who).unwrap(), text);
    }

    #[test]
    fn test_render_single_braces_are_literal() {
        let out = render("t", "zone { {{WHO}} }", lookup_who).unwrap();
        assert_eq!(out, "zone { world }");
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        let err = render("broken", "abc {{WHO", lookup_who).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnterminatedPlaceholder {
                template: "broken".to_string(),
                offset: 4,
            }
        );
    }

    #[test]
    fn test_render_unterminated_offset_counts_rendered_prefix() {
        let err = render("broken", "{{WHO}} x {{", lookup_who).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnterminatedPlaceholder {
                template: "broken".to_string(),
                offset: 10,
            }
        );
    }

    #[test]
    fn test_render_unknown_placeholder() {
        let err = render("broken", "{{WHO}} {{WHAT}}", lookup_who).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownPlaceholder {
                template: "broken".to_string(),
                name: "WHAT".to_string(),
            }
        );
    }

    #[test]
    fn test_zone_declaration_exact_stanza() {
        let out = render_zone_declaration(&example_request(None), &OutputLayout::default()).unwrap();

        assert_eq!(
            out,
            "\nzone \"example.com\" {\ntype master;\nfile \"/etc/bind/zones/example.com.db\";\n};\n"
        );
    }

    #[test]
    fn test_zone_declaration_follows_layout() {
        let layout = OutputLayout::new("/tmp/named.conf.local", "/srv/bind/zones");
        let out = render_zone_declaration(&example_request(None), &layout).unwrap();

        assert!(out.contains("file \"/srv/bind/zones/example.com.db\";"));
    }

    #[test]
    fn test_zone_data_default_ttl() {
        let out = render_zone_data(&example_request(None)).unwrap();
        assert_eq!(out.lines().next(), Some("$TTL 3600"));
    }

    #[test]
    fn test_zone_data_explicit_ttl_is_first_line() {
        for ttl in [0, 60, 86400, -1, 5_000_000_000, i64::MAX] {
            let out = render_zone_data(&example_request(Some(ttl))).unwrap();
            assert_eq!(out.lines().next(), Some(format!("$TTL {ttl}").as_str()));
        }
    }

    #[test]
    fn test_zone_data_soa_record() {
        let out = render_zone_data(&example_request(None)).unwrap();

        assert!(out.contains("@ 86400 IN SOA ns1.example.com. admin@example.com. ("));
        assert!(out.contains("2008021501 ; serial"));
        assert!(out.contains("86400 ; refresh"));
        assert!(out.contains("7200 ; retry"));
        assert!(out.contains("3600000 ; expire"));
        assert!(out.contains("86400 ) ; minimum"));
    }

    #[test]
    fn test_zone_data_a_records() {
        let out = render_zone_data(&example_request(None)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        for expected in [
            "ns1 IN A 10.0.0.5",
            "ns2 IN A 10.0.0.5",
            "example.com. IN A 10.0.0.5",
            "ftp IN A 10.0.0.5",
            "localhost.example.com. IN A 127.0.0.1",
        ] {
            let count = lines.iter().filter(|line| **line == expected).count();
            assert_eq!(count, 1, "expected exactly one '{expected}' in:\n{out}");
        }

        let a_records = lines.iter().filter(|line| line.contains(" IN A ")).count();
        assert_eq!(a_records, 5);
    }

    #[test]
    fn test_zone_data_ns_mx_and_cname_records() {
        let out = render_zone_data(&example_request(None)).unwrap();

        assert!(out.contains("example.com. 86400 IN NS ns1.example.com.\n"));
        assert!(out.contains("example.com. 86400 IN NS ns2.example.com.\n"));
        assert!(out.contains("example.com. IN MX 10 example.com.\n"));
        assert!(out.contains("mail IN CNAME example.com.\n"));
        assert!(out.contains("www IN CNAME example.com.\n"));
    }

    #[test]
    fn test_zone_data_has_no_leftover_placeholders() {
        let out = render_zone_data(&example_request(None)).unwrap();
        assert!(!out.contains("{{"));
        assert!(!out.contains("}}"));
    }

    #[test]
    fn test_zone_data_passes_inputs_through_unvalidated() {
        let request = ZoneRequest::new("not a domain", "not-an-ip", None).unwrap();
        let out = render_zone_data(&request).unwrap();

        assert!(out.contains("ns1 IN A not-an-ip"));
        assert!(out.contains("not a domain. IN A not-an-ip"));
    }
}
