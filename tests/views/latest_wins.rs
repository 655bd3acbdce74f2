use futures::{StreamExt, future::BoxFuture, stream::FuturesUnordered};
use impactsphere::{
    GenerationService, ImpactError, Prompt,
    library::{LibraryBuilder, LibraryCategory, LibraryView},
    playbook::{EsgPlaybookCategory, PlaybookBuilder, PlaybookView},
};
use std::time::Duration;

/// Answers after a per-topic delay, echoing the topic in the item title.
struct SlowByTopic;

impl GenerationService for SlowByTopic {
    fn generate<'a>(&'a self, prompt: &'a Prompt) -> BoxFuture<'a, Result<String, ImpactError>> {
        Box::pin(async move {
            let (topic, delay) = if prompt.text.contains("household waste") {
                ("tips", 80)
            } else if prompt.text.contains("recipes") {
                ("recipes", 5)
            } else if prompt.text.contains("key strategic business values") {
                ("value drivers", 60)
            } else {
                ("other", 5)
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(format!(r#"[{{"title":"{topic}","description":"from {topic}"}}]"#))
        })
    }
}

#[tokio::test]
async fn slow_response_for_abandoned_tab_is_dropped() {
    let generator = SlowByTopic;
    let mut view = LibraryView::new(LibraryCategory::Tips);

    let mut pending = FuturesUnordered::new();
    for category in [LibraryCategory::Tips, LibraryCategory::Recipes] {
        let ticket = view.select(category);
        let generator = &generator;
        pending.push(async move {
            let content = LibraryBuilder::new(generator, category).fetch().await;
            (ticket, content)
        });
    }
    assert!(view.is_loading());

    let mut applied = Vec::new();
    while let Some((ticket, content)) = pending.next().await {
        applied.push((*ticket.key(), view.apply(ticket, content)));
    }

    assert_eq!(
        applied,
        vec![(LibraryCategory::Recipes, true), (LibraryCategory::Tips, false)]
    );
    assert_eq!(*view.active(), LibraryCategory::Recipes);
    assert!(!view.is_loading());
    let shown = view.content().expect("recipes applied");
    assert_eq!(shown.data[0].title, "recipes");
}

#[tokio::test]
async fn playbook_switch_back_keeps_latest_request() {
    let generator = SlowByTopic;
    let mut view = PlaybookView::new(EsgPlaybookCategory::ValueDrivers);

    let first = view.select(EsgPlaybookCategory::ValueDrivers);
    let _ = view.select(EsgPlaybookCategory::IndustryUseCases);
    let again = view.select(EsgPlaybookCategory::ValueDrivers);

    let (a, b) = tokio::join!(
        PlaybookBuilder::new(&generator, EsgPlaybookCategory::ValueDrivers).fetch(),
        PlaybookBuilder::new(&generator, EsgPlaybookCategory::ValueDrivers).fetch(),
    );

    assert!(!view.apply(first, a));
    assert!(view.apply(again, b));
    assert_eq!(
        view.content().map(|c| c.data[0].title.as_str()),
        Some("value drivers")
    );
}
