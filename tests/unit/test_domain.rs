use catalogue_api::domain::catalogue::{
    entity::Catalogue,
    filter::{CatalogueFilter, EnabledFilter},
};

#[test]
fn enabled_defaults_to_enabled_only() {
    assert_eq!(EnabledFilter::default(), EnabledFilter::Only(true));
    assert_eq!(CatalogueFilter::builder().build().enabled(), Some(true));
}

#[test]
fn explicit_false_is_still_a_constraint() {
    let filter = CatalogueFilter::builder()
        .enabled(EnabledFilter::Only(false))
        .build();
    assert_eq!(filter.enabled(), Some(false));
}

#[test]
fn any_lifts_the_enabled_constraint() {
    let filter = CatalogueFilter::builder().enabled(EnabledFilter::Any).build();
    assert_eq!(filter.enabled(), None);
}

#[test]
fn empty_title_displays_the_id() {
    let catalogue = Catalogue {
        id: "CAT-0042".into(),
        title: None,
        ..Default::default()
    };
    assert_eq!(catalogue.display_title(), "CAT-0042");
    assert!(!catalogue.title_contains("cat"));
}
