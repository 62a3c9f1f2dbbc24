use masthead_core::{
    Article, Author, CatalogRepository, InMemoryCatalog, Magazine, MagazineId, ValidationError,
};
use std::collections::BTreeSet;

fn magazine(catalog: &mut InMemoryCatalog, name: &str, category: &str) -> MagazineId {
    Magazine::create(catalog, name, category).unwrap().id()
}

#[test]
fn three_articles_make_a_contributing_author() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");

    for title in ["Ownership basics", "Lifetimes in depth", "Traits at work"] {
        ama.add_article(&mut catalog, tech, title).unwrap();
    }

    let magazines = ama.magazines(&catalog);
    assert_eq!(magazines.len(), 1);
    assert_eq!(magazines[0].name(), "Tech Weekly");

    let tech_weekly = catalog.magazine(tech).unwrap();
    assert_eq!(tech_weekly.contributing_authors(&catalog), Some(vec![&ama]));
    assert_eq!(
        ama.topic_areas(&catalog),
        Some(BTreeSet::from(["Technology".to_string()]))
    );
}

#[test]
fn exactly_two_articles_is_not_contributing() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let kofi = Author::new("Kofi").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");
    let food = magazine(&mut catalog, "Food Digest", "Cooking");

    ama.add_article(&mut catalog, tech, "First column").unwrap();
    ama.add_article(&mut catalog, tech, "Second column").unwrap();
    // Articles elsewhere do not count toward this magazine.
    ama.add_article(&mut catalog, food, "Elsewhere piece").unwrap();
    for title in ["Kofi one", "Kofi two", "Kofi three"] {
        kofi.add_article(&mut catalog, tech, title).unwrap();
    }

    let tech_weekly = catalog.magazine(tech).unwrap();
    assert_eq!(tech_weekly.contributing_authors(&catalog), Some(vec![&kofi]));

    let food_digest = catalog.magazine(food).unwrap();
    assert_eq!(food_digest.contributing_authors(&catalog), None);
}

#[test]
fn contributors_are_distinct_in_first_appearance_order() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let kofi = Author::new("Kofi").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");

    kofi.add_article(&mut catalog, tech, "Kofi first").unwrap();
    ama.add_article(&mut catalog, tech, "Ama first").unwrap();
    kofi.add_article(&mut catalog, tech, "Kofi second").unwrap();

    let tech_weekly = catalog.magazine(tech).unwrap();
    assert_eq!(tech_weekly.contributors(&catalog), vec![&kofi, &ama]);
    assert_eq!(
        tech_weekly.article_titles(&catalog),
        Some(vec!["Kofi first", "Ama first", "Kofi second"])
    );
}

#[test]
fn topic_areas_deduplicate_categories() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");
    let gadgets = magazine(&mut catalog, "Gadget Log", "Technology");
    let food = magazine(&mut catalog, "Food Digest", "Cooking");

    ama.add_article(&mut catalog, tech, "Compilers today").unwrap();
    ama.add_article(&mut catalog, tech, "Linkers today").unwrap();
    ama.add_article(&mut catalog, gadgets, "Phones of 2026").unwrap();
    ama.add_article(&mut catalog, food, "Jollof secrets").unwrap();

    assert_eq!(ama.magazines(&catalog).len(), 3);
    assert_eq!(
        ama.topic_areas(&catalog),
        Some(BTreeSet::from(["Cooking".to_string(), "Technology".to_string()]))
    );
}

#[test]
fn topic_areas_follow_category_changes() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");
    ama.add_article(&mut catalog, tech, "Compilers today").unwrap();

    catalog
        .magazine_mut(tech)
        .unwrap()
        .set_category("Science")
        .unwrap();

    assert_eq!(
        ama.topic_areas(&catalog),
        Some(BTreeSet::from(["Science".to_string()]))
    );
}

#[test]
fn top_publisher_prefers_most_articles_then_earliest() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let first = magazine(&mut catalog, "First Press", "News");
    let second = magazine(&mut catalog, "Second Press", "News");
    magazine(&mut catalog, "Empty Press", "News");

    assert_eq!(Magazine::top_publisher(&catalog), None);

    ama.add_article(&mut catalog, second, "Second lead").unwrap();
    assert_eq!(Magazine::top_publisher(&catalog).unwrap().id(), second);

    ama.add_article(&mut catalog, first, "First lead").unwrap();
    // Tie: the earlier-registered magazine wins.
    assert_eq!(Magazine::top_publisher(&catalog).unwrap().id(), first);

    ama.add_article(&mut catalog, second, "Second follow-up").unwrap();
    assert_eq!(Magazine::top_publisher(&catalog).unwrap().id(), second);
}

#[test]
fn failed_magazine_construction_leaves_registry_unchanged() {
    let mut catalog = InMemoryCatalog::new();
    magazine(&mut catalog, "Tech Weekly", "Technology");

    let err = Magazine::create(&mut catalog, "A", "Cat").unwrap_err();
    assert_eq!(err, ValidationError::MagazineNameLength { length: 1 });
    assert_eq!(catalog.magazines().len(), 1);
}

#[test]
fn article_validation_failures_propagate_through_add_article() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");

    let err = ama.add_article(&mut catalog, tech, "Tiny").unwrap_err();
    assert_eq!(err, ValidationError::TitleLength { length: 4 });
    assert!(ama.articles(&catalog).is_empty());
    assert_eq!(ama.topic_areas(&catalog), None);
}

#[test]
fn article_constructor_and_add_article_are_equivalent() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");

    Article::create(&mut catalog, &ama, tech, "Direct construction").unwrap();
    ama.add_article(&mut catalog, tech, "Through the author").unwrap();

    let titles = ama
        .articles(&catalog)
        .into_iter()
        .map(Article::title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Direct construction", "Through the author"]);
}

#[test]
fn read_queries_are_idempotent() {
    let mut catalog = InMemoryCatalog::new();
    let ama = Author::new("Ama").unwrap();
    let kofi = Author::new("Kofi").unwrap();
    let tech = magazine(&mut catalog, "Tech Weekly", "Technology");
    let food = magazine(&mut catalog, "Food Digest", "Cooking");
    ama.add_article(&mut catalog, tech, "Compilers today").unwrap();
    kofi.add_article(&mut catalog, food, "Jollof secrets").unwrap();
    ama.add_article(&mut catalog, food, "Suya at home").unwrap();

    let tech_weekly = catalog.magazine(tech).unwrap();
    assert_eq!(ama.articles(&catalog), ama.articles(&catalog));
    assert_eq!(ama.magazines(&catalog), ama.magazines(&catalog));
    assert_eq!(ama.topic_areas(&catalog), ama.topic_areas(&catalog));
    assert_eq!(
        tech_weekly.contributors(&catalog),
        tech_weekly.contributors(&catalog)
    );
    assert_eq!(
        Magazine::top_publisher(&catalog),
        Magazine::top_publisher(&catalog)
    );
}
