use super::*;

#[test]
fn embedded_content_parses() {
    let content = PortfolioContent::embedded().expect("embedded content");
    assert_eq!(content.profile.name, "Aysha Areej");
    assert_eq!(content.profile.resume.href, "/Resume.pdf");
    assert_eq!(content.profile.resume.download_name, "Aysha_Areej_Resume.pdf");
}

#[test]
fn embedded_content_has_every_section_populated() {
    let content = PortfolioContent::load_or_default();
    assert_eq!(content.experiences.len(), 2);
    assert_eq!(content.projects.len(), 5);
    assert_eq!(content.projects.iter().filter(|p| p.featured).count(), 4);
    assert_eq!(
        content.skills.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        ["Languages", "Frontend", "Backend", "Tools"]
    );
    assert_eq!(content.certifications.len(), 5);
    assert_eq!(content.stats.len(), 3);
}

#[test]
fn project_without_featured_flag_defaults_to_false() {
    let content = PortfolioContent::embedded().unwrap();
    let wholesale = content.projects.last().unwrap();
    assert_eq!(wholesale.title, "Wholesale E-Commerce Platform");
    assert!(!wholesale.featured);
}

#[test]
fn malformed_content_is_a_parse_error() {
    let err = PortfolioContent::from_json("{ \"profile\": 3 }").unwrap_err();
    assert!(err.to_string().starts_with("portfolio content is not valid"));
}

#[test]
fn optional_lists_and_links_may_be_omitted() {
    let raw = r#"{
        "profile": {
            "name": "N", "role": "R", "focus": "F", "location": "L",
            "experience_summary": "E",
            "availability": { "title": "T", "note": "N" },
            "resume": { "href": "/cv.pdf", "download_name": "cv.pdf" },
            "copyright_year": 2024
        },
        "projects": [
            { "title": "P", "period": "2024", "description": "D" }
        ]
    }"#;
    let content = PortfolioContent::from_json(raw).unwrap();
    assert!(content.experiences.is_empty());
    assert_eq!(content.projects[0].links, ProjectLinks::default());
    assert!(content.projects[0].tech.is_empty());
}

#[test]
fn external_links_open_in_new_tab() {
    let web = ContactLink { kind: LinkKind::Linkedin, label: "L".into(), href: "https://example.com".into() };
    let mail = ContactLink { kind: LinkKind::Email, label: "M".into(), href: "mailto:a@b.c".into() };
    assert_eq!(web.anchor_attrs(), (Some("_blank"), Some("noreferrer")));
    assert_eq!(mail.anchor_attrs(), (None, None));
    assert!(!mail.is_external());
}

#[test]
fn contact_links_use_fixed_schemes() {
    let content = PortfolioContent::embedded().unwrap();
    let kinds: Vec<LinkKind> = content.contacts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [LinkKind::Email, LinkKind::Phone, LinkKind::Linkedin]);
    assert!(content.contacts[0].href.starts_with("mailto:"));
    assert!(content.contacts[1].href.starts_with("tel:"));
    assert!(content.contacts[2].is_external());
}
