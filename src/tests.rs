#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::error::{ServiceError, ServiceResult};
        use crate::services::slug::{
            increment_suffix, resolve_slug, slug_base, validate_slug,
        };

        fn lookup(count: i64) -> impl Fn(&str, Option<i64>) -> ServiceResult<i64> {
            move |_slug: &str, _exclude: Option<i64>| Ok(count)
        }

        #[test]
        fn test_slug_base_basic() {
            assert_eq!(slug_base("Hello World").unwrap(), "hello-world");
        }

        #[test]
        fn test_slug_base_special_characters() {
            assert_eq!(slug_base("Hello, World!").unwrap(), "hello-world");
        }

        #[test]
        fn test_slug_base_unicode() {
            assert_eq!(slug_base("Café au lait").unwrap(), "cafe-au-lait");
        }

        #[test]
        fn test_slug_base_strips_markup() {
            assert_eq!(slug_base("<b>Hello</b> World").unwrap(), "hello-world");
        }

        #[test]
        fn test_slug_base_leading_trailing_spaces() {
            assert_eq!(slug_base("  Hello World  ").unwrap(), "hello-world");
        }

        #[test]
        fn test_slug_base_rejects_empty() {
            assert!(matches!(slug_base("   "), Err(ServiceError::InvalidTitle)));
            assert!(matches!(slug_base("!!!"), Err(ServiceError::InvalidTitle)));
            assert!(matches!(
                slug_base("<p></p>"),
                Err(ServiceError::InvalidTitle)
            ));
        }

        #[test]
        fn test_resolve_slug_no_collision() {
            let slug = resolve_slug("Hello World", &lookup(0), None).unwrap();
            assert_eq!(slug, "hello-world");
        }

        #[test]
        fn test_resolve_slug_single_collision() {
            let slug = resolve_slug("Hello World", &lookup(1), None).unwrap();
            assert_eq!(slug, "hello-world-2");
        }

        #[test]
        fn test_resolve_slug_multiple_collisions() {
            let slug = resolve_slug("Hello World", &lookup(3), None).unwrap();
            assert_eq!(slug, "hello-world-4");
        }

        #[test]
        fn test_resolve_slug_passes_exclude_id() {
            let checker = |_slug: &str, exclude: Option<i64>| -> ServiceResult<i64> {
                assert_eq!(exclude, Some(7));
                Ok(0)
            };
            resolve_slug("Hello World", &checker, Some(7)).unwrap();
        }

        #[test]
        fn test_increment_suffix_numeric_tail() {
            assert_eq!(increment_suffix("hello-world-2"), "hello-world-3");
            assert_eq!(increment_suffix("hello-world-9"), "hello-world-10");
        }

        #[test]
        fn test_increment_suffix_no_tail() {
            assert_eq!(increment_suffix("hello-world"), "hello-world-2");
            assert_eq!(increment_suffix("hello"), "hello-2");
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("summer-workshop-2024"));
            assert!(validate_slug("a"));
            assert!(validate_slug("123"));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello_world"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug(&"a".repeat(201)));
        }
    }

    mod reading_time_tests {
        use crate::services::reading_time::{estimate_read_minutes, read_time_label};

        #[test]
        fn test_single_word_is_one_minute() {
            assert_eq!(estimate_read_minutes("hello"), 1);
        }

        #[test]
        fn test_empty_content_is_one_minute() {
            assert_eq!(estimate_read_minutes(""), 1);
        }

        #[test]
        fn test_exactly_two_hundred_words() {
            let content = "word ".repeat(200);
            assert_eq!(estimate_read_minutes(&content), 1);
        }

        #[test]
        fn test_rounds_up_past_boundary() {
            let content = "word ".repeat(201);
            assert_eq!(estimate_read_minutes(&content), 2);
        }

        #[test]
        fn test_four_hundred_words() {
            let content = "word ".repeat(400);
            assert_eq!(estimate_read_minutes(&content), 2);
        }

        #[test]
        fn test_markup_does_not_count_as_words() {
            let content = format!("<p>{}</p>", "word ".repeat(200));
            assert_eq!(estimate_read_minutes(&content), 1);
        }

        #[test]
        fn test_label_format() {
            assert_eq!(read_time_label("hello"), "1 min read");
            assert_eq!(read_time_label(&"word ".repeat(500)), "3 min read");
        }
    }

    mod sanitize_tests {
        use crate::services::sanitize::{clean_text, sanitize_string_list, strip_tags};

        #[test]
        fn test_strip_tags_basic() {
            assert_eq!(strip_tags("<p>Hello</p>"), "Hello");
        }

        #[test]
        fn test_strip_tags_nested() {
            assert_eq!(strip_tags("<div><b>Bold</b> text</div>"), "Bold text");
        }

        #[test]
        fn test_strip_tags_plain_text_unchanged() {
            assert_eq!(strip_tags("just text"), "just text");
        }

        #[test]
        fn test_strip_tags_unclosed_tag() {
            assert_eq!(strip_tags("hello <b unclosed"), "hello ");
        }

        #[test]
        fn test_clean_text_trims() {
            assert_eq!(clean_text("  <i>hi</i>  "), "hi");
        }

        #[test]
        fn test_string_list_from_array() {
            let value = serde_json::json!(["a", " b ", "", "c"]);
            assert_eq!(sanitize_string_list(&value), vec!["a", "b", "c"]);
        }

        #[test]
        fn test_string_list_drops_non_strings() {
            let value = serde_json::json!(["a", 1, null, "b"]);
            assert_eq!(sanitize_string_list(&value), vec!["a", "b"]);
        }

        #[test]
        fn test_string_list_non_array_is_empty() {
            assert!(sanitize_string_list(&serde_json::json!("a,b")).is_empty());
            assert!(sanitize_string_list(&serde_json::json!(42)).is_empty());
            assert!(sanitize_string_list(&serde_json::Value::Null).is_empty());
        }
    }

    mod validate_tests {
        use crate::services::error::ServiceError;
        use crate::services::validate::{
            is_valid_email, non_negative, optional_text, required_rich_text, required_text,
            Errors,
        };

        #[test]
        fn test_required_text_present() {
            let mut errors = Errors::new();
            let value = required_text(&mut errors, "title", Some("  Hello  "), 255);
            assert_eq!(value, "Hello");
            assert!(errors.is_empty());
        }

        #[test]
        fn test_required_text_missing() {
            let mut errors = Errors::new();
            required_text(&mut errors, "title", None, 255);
            let err = errors.into_result().unwrap_err();
            match err {
                ServiceError::Validation(fields) => {
                    assert_eq!(fields["title"], "The title field is required.");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[test]
        fn test_required_text_blank_after_stripping() {
            let mut errors = Errors::new();
            required_text(&mut errors, "title", Some("<p>  </p>"), 255);
            assert!(!errors.is_empty());
        }

        #[test]
        fn test_required_text_too_long() {
            let mut errors = Errors::new();
            required_text(&mut errors, "title", Some(&"a".repeat(300)), 255);
            let err = errors.into_result().unwrap_err();
            match err {
                ServiceError::Validation(fields) => {
                    assert_eq!(
                        fields["title"],
                        "The title may not be greater than 255 characters."
                    );
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[test]
        fn test_first_error_per_field_wins() {
            let mut errors = Errors::new();
            errors.add("title", "first");
            errors.add("title", "second");
            match errors.into_result().unwrap_err() {
                ServiceError::Validation(fields) => assert_eq!(fields["title"], "first"),
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[test]
        fn test_optional_text_blank_is_none() {
            let mut errors = Errors::new();
            assert_eq!(optional_text(&mut errors, "bio", Some("   "), 0), None);
            assert_eq!(optional_text(&mut errors, "bio", None, 0), None);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_rich_text_kept_verbatim() {
            let mut errors = Errors::new();
            let value = required_rich_text(&mut errors, "content", Some("<p>Hello</p>"));
            assert_eq!(value, "<p>Hello</p>");
            assert!(errors.is_empty());
        }

        #[test]
        fn test_rich_text_markup_only_is_missing() {
            let mut errors = Errors::new();
            required_rich_text(&mut errors, "content", Some("<p><br></p>"));
            assert!(!errors.is_empty());
        }

        #[test]
        fn test_email_shapes() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("first.last@example.org"));
            assert!(!is_valid_email("no-at-sign"));
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a @b.co"));
            assert!(!is_valid_email("a@.co"));
        }

        #[test]
        fn test_non_negative() {
            let mut errors = Errors::new();
            assert_eq!(non_negative(&mut errors, "order", Some(0)), Some(0));
            assert_eq!(non_negative(&mut errors, "order", None), None);
            assert!(errors.is_empty());
            non_negative(&mut errors, "order", Some(-1));
            assert!(!errors.is_empty());
        }
    }

    mod workshop_status_tests {
        use crate::models::WorkshopStatus;
        use std::str::FromStr;

        #[test]
        fn test_from_str() {
            assert_eq!(
                WorkshopStatus::from_str("upcoming").unwrap(),
                WorkshopStatus::Upcoming
            );
            assert_eq!(
                WorkshopStatus::from_str("OPEN").unwrap(),
                WorkshopStatus::Open
            );
            assert_eq!(
                WorkshopStatus::from_str("completed").unwrap(),
                WorkshopStatus::Completed
            );
            assert_eq!(
                WorkshopStatus::from_str("cancelled").unwrap(),
                WorkshopStatus::Cancelled
            );
            assert!(WorkshopStatus::from_str("archived").is_err());
        }

        #[test]
        fn test_display_round_trip() {
            for status in [
                WorkshopStatus::Upcoming,
                WorkshopStatus::Open,
                WorkshopStatus::Completed,
                WorkshopStatus::Cancelled,
            ] {
                assert_eq!(
                    WorkshopStatus::from_str(&status.to_string()).unwrap(),
                    status
                );
            }
        }

        #[test]
        fn test_default_is_upcoming() {
            assert_eq!(WorkshopStatus::default(), WorkshopStatus::Upcoming);
        }
    }

    mod config_tests {
        use crate::Config;

        #[test]
        fn test_parse_full_config() {
            let raw = r#"
[site]
name = "Test Institute"
url = "https://example.org"

[server]
host = "0.0.0.0"
port = 9000

[database]
path = "data/test.db"

[media]
upload_dir = "uploads"
max_upload_bytes = 1048576
"#;
            let config: Config = toml::from_str(raw).unwrap();
            assert_eq!(config.site.name, "Test Institute");
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.media.upload_dir, "uploads");
            assert_eq!(config.media.max_upload_bytes, 1_048_576);
        }

        #[test]
        fn test_defaults_fill_missing_sections() {
            let raw = r#"
[site]
name = "Test"
url = "http://localhost:8000"

[database]
path = "data/test.db"
"#;
            let config: Config = toml::from_str(raw).unwrap();
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.media.upload_dir, "storage");
        }
    }

    mod media_tests {
        use crate::services::media::normalize_image_path;

        #[test]
        fn test_normalize_plain_path() {
            assert_eq!(
                normalize_image_path("images/abc.png").as_deref(),
                Some("images/abc.png")
            );
        }

        #[test]
        fn test_normalize_strips_directories() {
            assert_eq!(
                normalize_image_path("../../etc/passwd").as_deref(),
                Some("images/passwd")
            );
            assert_eq!(
                normalize_image_path("/storage/images/x.jpg").as_deref(),
                Some("images/x.jpg")
            );
        }

        #[test]
        fn test_normalize_rejects_blank() {
            assert_eq!(normalize_image_path(""), None);
            assert_eq!(normalize_image_path("   "), None);
        }
    }
}
