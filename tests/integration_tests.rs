use campus_cms::models::{
    CreateBlog, CreateCertificate, CreateCourse, CreateFaculty, CreateGalleryItem,
    CreateTestimonial, CreateWorkshop, UpdateBlog, UpdateWorkshop, WorkshopStatus,
};
use campus_cms::services::error::ServiceError;
use campus_cms::services::{
    api_token, blogs, certificates, courses, dashboard, faculty, gallery, testimonials, workshops,
};
use campus_cms::Database;

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

fn sample_blog(title: &str) -> CreateBlog {
    CreateBlog {
        title: Some(title.to_string()),
        excerpt: Some("A short excerpt.".to_string()),
        content: Some("<p>Some body text for the post.</p>".to_string()),
        category: Some("News".to_string()),
        ..Default::default()
    }
}

fn sample_workshop(title: &str) -> CreateWorkshop {
    CreateWorkshop {
        title: Some(title.to_string()),
        date: Some("2026-09-01".to_string()),
        status: Some("upcoming".to_string()),
        ..Default::default()
    }
}

mod blog_integration_tests {
    use super::*;

    #[test]
    fn test_create_blog_derives_slug_and_read_time() {
        let db = create_test_db();
        let blog = blogs::create_blog(&db, sample_blog("Hello World")).unwrap();

        assert_eq!(blog.slug, "hello-world");
        assert_eq!(blog.read_time, "1 min read");
        assert_eq!(blog.author_name, "Admin");
    }

    #[test]
    fn test_duplicate_title_gets_suffixed_slug() {
        let db = create_test_db();
        let first = blogs::create_blog(&db, sample_blog("Hello World")).unwrap();
        let second = blogs::create_blog(&db, sample_blog("Hello World")).unwrap();

        assert_eq!(first.slug, "hello-world");
        assert_eq!(second.slug, "hello-world-2");
    }

    #[test]
    fn test_third_duplicate_counts_base_matches_only() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Hello World")).unwrap();
        blogs::create_blog(&db, sample_blog("Hello World")).unwrap();
        let third = blogs::create_blog(&db, sample_blog("Hello World")).unwrap();

        // Only "hello-world" itself matches the base, so the count-based
        // suffix lands on -2 and the UNIQUE backstop bumps it to -3.
        assert_eq!(third.slug, "hello-world-3");
    }

    #[test]
    fn test_long_read_time() {
        let db = create_test_db();
        let mut input = sample_blog("Long Post");
        input.content = Some("word ".repeat(450));
        let blog = blogs::create_blog(&db, input).unwrap();

        assert_eq!(blog.read_time, "3 min read");
    }

    #[test]
    fn test_get_blog_by_id_and_slug() {
        let db = create_test_db();
        let created = blogs::create_blog(&db, sample_blog("Findable Post")).unwrap();

        let by_id = blogs::get_blog(&db, &created.id.to_string()).unwrap();
        let by_slug = blogs::get_blog(&db, "findable-post").unwrap();

        assert_eq!(by_id.id, created.id);
        assert_eq!(by_slug.id, created.id);
    }

    #[test]
    fn test_get_missing_blog_is_not_found() {
        let db = create_test_db();
        let err = blogs::get_blog(&db, "nope").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Blog")));
    }

    #[test]
    fn test_create_blog_missing_fields_collects_errors() {
        let db = create_test_db();
        let err = blogs::create_blog(&db, CreateBlog::default()).unwrap_err();

        match err {
            ServiceError::Validation(fields) => {
                assert_eq!(fields["title"], "The title field is required.");
                assert!(fields.contains_key("excerpt"));
                assert!(fields.contains_key("content"));
                assert!(fields.contains_key("category"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_create_blog_markup_only_title_is_invalid() {
        let db = create_test_db();
        let err = blogs::create_blog(&db, sample_blog("<p></p>")).unwrap_err();
        // Stripping leaves nothing, caught as a missing title.
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_update_same_title_keeps_slug() {
        let db = create_test_db();
        let created = blogs::create_blog(&db, sample_blog("Stable Title")).unwrap();

        let updated = blogs::update_blog(
            &db,
            "stable-title",
            UpdateBlog {
                title: Some("Stable Title".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.slug, "stable-title");
    }

    #[test]
    fn test_update_new_title_recomputes_slug() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Old Title")).unwrap();

        let updated = blogs::update_blog(
            &db,
            "old-title",
            UpdateBlog {
                title: Some("New Title".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.slug, "new-title");
        assert_eq!(updated.title, "New Title");
    }

    #[test]
    fn test_update_slug_collision_excludes_self() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Taken Title")).unwrap();
        blogs::create_blog(&db, sample_blog("Other Title")).unwrap();

        let updated = blogs::update_blog(
            &db,
            "other-title",
            UpdateBlog {
                title: Some("Taken Title".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.slug, "taken-title-2");
    }

    #[test]
    fn test_update_without_content_keeps_read_time() {
        let db = create_test_db();
        let mut input = sample_blog("Read Time Post");
        input.content = Some("word ".repeat(350));
        let created = blogs::create_blog(&db, input).unwrap();
        assert_eq!(created.read_time, "2 min read");

        let updated = blogs::update_blog(
            &db,
            "read-time-post",
            UpdateBlog {
                category: Some("Updates".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.read_time, "2 min read");
        assert_eq!(updated.category, "Updates");
    }

    #[test]
    fn test_update_content_recomputes_read_time() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Growing Post")).unwrap();

        let updated = blogs::update_blog(
            &db,
            "growing-post",
            UpdateBlog {
                content: Some("word ".repeat(900)),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.read_time, "5 min read");
    }

    #[test]
    fn test_tags_round_trip_and_loose_input() {
        let db = create_test_db();
        let mut input = sample_blog("Tagged Post");
        input.tags = Some(serde_json::json!(["rust", " web ", ""]));
        let blog = blogs::create_blog(&db, input).unwrap();
        assert_eq!(blog.tags, vec!["rust", "web"]);

        let updated = blogs::update_blog(
            &db,
            "tagged-post",
            UpdateBlog {
                tags: Some(serde_json::json!("not-an-array")),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(updated.tags.is_empty());
    }

    #[test]
    fn test_delete_by_slug_then_fetch_is_not_found() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Doomed Post")).unwrap();

        blogs::delete_blog(&db, "doomed-post").unwrap();

        let err = blogs::get_blog(&db, "doomed-post").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Blog")));
    }

    #[test]
    fn test_list_blogs_newest_first() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("First")).unwrap();
        blogs::create_blog(&db, sample_blog("Second")).unwrap();

        let list = blogs::list_blogs(&db).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Second");
        assert_eq!(list[1].title, "First");
    }
}

mod course_integration_tests {
    use super::*;

    #[test]
    fn test_create_course_with_curriculum() {
        let db = create_test_db();
        let course = courses::create_course(
            &db,
            CreateCourse {
                title: Some("Welding Basics".to_string()),
                description: Some("<p>Learn to weld.</p>".to_string()),
                category: Some("Trade".to_string()),
                duration: Some("6 weeks".to_string()),
                curriculum: Some(serde_json::json!(["Safety", "Arc welding"])),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(course.slug, "welding-basics");
        assert_eq!(course.curriculum, vec!["Safety", "Arc welding"]);
    }

    #[test]
    fn test_course_slugs_share_namespace_with_courses_only() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Shared Name")).unwrap();

        let course = courses::create_course(
            &db,
            CreateCourse {
                title: Some("Shared Name".to_string()),
                description: Some("desc".to_string()),
                category: Some("Trade".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        // Slug uniqueness is per collection.
        assert_eq!(course.slug, "shared-name");
    }

    #[test]
    fn test_delete_course_by_slug() {
        let db = create_test_db();
        courses::create_course(
            &db,
            CreateCourse {
                title: Some("Short Lived".to_string()),
                description: Some("desc".to_string()),
                category: Some("Trade".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        courses::delete_course(&db, "short-lived").unwrap();
        let err = courses::get_course(&db, "short-lived").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("Course")));
    }
}

mod workshop_integration_tests {
    use super::*;

    #[test]
    fn test_create_workshop_with_images() {
        let db = create_test_db();
        let mut input = sample_workshop("Summer Workshop");
        input.images = Some(serde_json::json!(["images/a.jpg", "images/b.jpg"]));
        input.instructors = Some(serde_json::json!(["Jane Doe"]));

        let workshop = workshops::create_workshop(&db, input).unwrap();

        assert_eq!(workshop.slug, "summer-workshop");
        assert_eq!(workshop.status, WorkshopStatus::Upcoming);
        assert_eq!(workshop.images.len(), 2);
        assert_eq!(workshop.instructors, vec!["Jane Doe"]);
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let db = create_test_db();
        let mut input = sample_workshop("Bad Status");
        input.status = Some("archived".to_string());

        let err = workshops::create_workshop(&db, input).unwrap_err();
        match err {
            ServiceError::Validation(fields) => assert!(fields.contains_key("status")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_image_replacement_swaps_whole_set() {
        let db = create_test_db();
        let mut input = sample_workshop("Replace Images");
        input.images = Some(serde_json::json!(["images/old1.jpg", "images/old2.jpg"]));
        let created = workshops::create_workshop(&db, input).unwrap();

        let updated = workshops::update_workshop(
            &db,
            "replace-images",
            UpdateWorkshop {
                images: Some(serde_json::json!(["images/new.jpg"])),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.images.len(), 1);
        assert_eq!(updated.images[0].image_path, "images/new.jpg");
    }

    #[test]
    fn test_update_without_images_keeps_existing_set() {
        let db = create_test_db();
        let mut input = sample_workshop("Keep Images");
        input.images = Some(serde_json::json!(["images/keep.jpg"]));
        workshops::create_workshop(&db, input).unwrap();

        let updated = workshops::update_workshop(
            &db,
            "keep-images",
            UpdateWorkshop {
                location: Some("Main hall".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.images.len(), 1);
        assert_eq!(updated.location.as_deref(), Some("Main hall"));
    }

    #[test]
    fn test_failed_image_replacement_rolls_back() {
        let db = create_test_db();
        let mut input = sample_workshop("Atomic Images");
        input.images = Some(serde_json::json!(["images/original.jpg"]));
        let created = workshops::create_workshop(&db, input).unwrap();

        // The blank path violates the CHECK constraint mid-replacement.
        let paths = vec!["images/new.jpg".to_string(), String::new()];
        let result = workshops::replace_workshop_images(&db, created.id, &paths);
        assert!(result.is_err());

        let images = workshops::workshop_images(&db, created.id).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].image_path, "images/original.jpg");
    }

    #[test]
    fn test_delete_workshop_cascades_images() {
        let db = create_test_db();
        let mut input = sample_workshop("Cascading");
        input.images = Some(serde_json::json!(["images/x.jpg"]));
        let created = workshops::create_workshop(&db, input).unwrap();

        workshops::delete_workshop(&db, "cascading").unwrap();

        let images = workshops::workshop_images(&db, created.id).unwrap();
        assert!(images.is_empty());
    }
}

mod ordering_integration_tests {
    use super::*;

    fn sample_faculty(name: &str, order: Option<i64>) -> CreateFaculty {
        CreateFaculty {
            name: Some(name.to_string()),
            specialization: Some("Machining".to_string()),
            order,
            ..Default::default()
        }
    }

    #[test]
    fn test_faculty_order_assigned_max_plus_one() {
        let db = create_test_db();
        let first = faculty::create_faculty(&db, sample_faculty("A", None)).unwrap();
        let second = faculty::create_faculty(&db, sample_faculty("B", None)).unwrap();
        let pinned = faculty::create_faculty(&db, sample_faculty("C", Some(10))).unwrap();
        let after = faculty::create_faculty(&db, sample_faculty("D", None)).unwrap();

        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
        assert_eq!(pinned.order, 10);
        assert_eq!(after.order, 11);
    }

    #[test]
    fn test_faculty_is_active_defaults_true() {
        let db = create_test_db();
        let member = faculty::create_faculty(&db, sample_faculty("Active", None)).unwrap();
        assert!(member.is_active);
    }

    #[test]
    fn test_certificate_order_assignment() {
        let db = create_test_db();
        let make = |title: &str| CreateCertificate {
            title: Some(title.to_string()),
            issuer: Some("Trade Board".to_string()),
            year: Some("2025".to_string()),
            ..Default::default()
        };

        let first = certificates::create_certificate(&db, make("Cert A")).unwrap();
        let second = certificates::create_certificate(&db, make("Cert B")).unwrap();

        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
    }

    #[test]
    fn test_gallery_requires_image_and_orders() {
        let db = create_test_db();
        let err = gallery::create_gallery_item(
            &db,
            CreateGalleryItem {
                title: Some("No Image".to_string()),
                category: Some("Campus".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        match err {
            ServiceError::Validation(fields) => assert!(fields.contains_key("image")),
            other => panic!("unexpected error: {:?}", other),
        }

        let item = gallery::create_gallery_item(
            &db,
            CreateGalleryItem {
                title: Some("Quad".to_string()),
                category: Some("Campus".to_string()),
                image: Some("images/quad.jpg".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(item.order, 0);
    }
}

mod testimonial_integration_tests {
    use super::*;

    fn sample(name: &str, rating: i64) -> CreateTestimonial {
        CreateTestimonial {
            name: Some(name.to_string()),
            rating: Some(rating),
            ..Default::default()
        }
    }

    #[test]
    fn test_rating_bounds() {
        let db = create_test_db();
        assert!(testimonials::create_testimonial(&db, sample("Min", 1)).is_ok());
        assert!(testimonials::create_testimonial(&db, sample("Max", 5)).is_ok());

        for bad in [0, 6, -1] {
            let err = testimonials::create_testimonial(&db, sample("Bad", bad)).unwrap_err();
            match err {
                ServiceError::Validation(fields) => assert!(fields.contains_key("rating")),
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_rating_is_required() {
        let db = create_test_db();
        let err = testimonials::create_testimonial(
            &db,
            CreateTestimonial {
                name: Some("No Rating".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}

mod dashboard_integration_tests {
    use super::*;

    #[test]
    fn test_stats_empty_database() {
        let db = create_test_db();
        let stats = dashboard::stats(&db).unwrap();

        assert_eq!(stats.blogs, 0);
        assert_eq!(stats.workshops.total, 0);
        assert_eq!(stats.workshops.registrations, 0);
        assert_eq!(stats.testimonials.featured, 0);
    }

    #[test]
    fn test_stats_counts_and_breakdowns() {
        let db = create_test_db();
        blogs::create_blog(&db, sample_blog("Post")).unwrap();

        let mut upcoming = sample_workshop("Upcoming One");
        upcoming.registrations = Some(5);
        workshops::create_workshop(&db, upcoming).unwrap();

        let mut done = sample_workshop("Finished One");
        done.status = Some("completed".to_string());
        done.registrations = Some(12);
        workshops::create_workshop(&db, done).unwrap();

        testimonials::create_testimonial(
            &db,
            CreateTestimonial {
                name: Some("Happy".to_string()),
                rating: Some(5),
                is_featured: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        testimonials::create_testimonial(
            &db,
            CreateTestimonial {
                name: Some("Quiet".to_string()),
                rating: Some(4),
                ..Default::default()
            },
        )
        .unwrap();

        let stats = dashboard::stats(&db).unwrap();
        assert_eq!(stats.blogs, 1);
        assert_eq!(stats.workshops.total, 2);
        assert_eq!(stats.workshops.upcoming, 1);
        assert_eq!(stats.workshops.registrations, 17);
        assert_eq!(stats.testimonials.total, 2);
        assert_eq!(stats.testimonials.featured, 1);
    }
}

mod api_token_integration_tests {
    use super::*;

    #[test]
    fn test_create_and_validate_token() {
        let db = create_test_db();
        let (raw, created) = api_token::create_token(&db, "deploy", None).unwrap();

        assert!(raw.starts_with("cm_"));
        assert_eq!(created.name, "deploy");

        let validated = api_token::validate_token(&db, &raw)
            .unwrap()
            .expect("token should validate");
        assert_eq!(validated.id, created.id);
    }

    #[test]
    fn test_validate_rejects_unknown_and_unprefixed() {
        let db = create_test_db();
        api_token::create_token(&db, "deploy", None).unwrap();

        assert!(api_token::validate_token(&db, "cm_bogus").unwrap().is_none());
        assert!(api_token::validate_token(&db, "not-a-token").unwrap().is_none());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let db = create_test_db();
        let (raw, _) = api_token::create_token(&db, "stale", Some("2020-01-01T00:00:00Z")).unwrap();

        assert!(api_token::validate_token(&db, &raw).unwrap().is_none());
    }

    #[test]
    fn test_validate_touches_last_used() {
        let db = create_test_db();
        let (raw, created) = api_token::create_token(&db, "deploy", None).unwrap();
        assert!(created.last_used_at.is_none());

        api_token::validate_token(&db, &raw).unwrap();

        let tokens = api_token::list_tokens(&db).unwrap();
        assert!(tokens[0].last_used_at.is_some());
    }

    #[test]
    fn test_revoked_token_stops_validating() {
        let db = create_test_db();
        let (raw, created) = api_token::create_token(&db, "deploy", None).unwrap();

        api_token::revoke_token(&db, created.id).unwrap();

        assert!(api_token::validate_token(&db, &raw).unwrap().is_none());
        assert!(api_token::list_tokens(&db).unwrap().is_empty());
    }
}
