//! Service integration tests
//!
//! Exercise the client services end-to-end against the in-memory backend.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use std::sync::Arc;

use integration_tests::{fixtures::*, test_context, InMemoryBackend, TEST_SERVER_URL};
use traq_core::DomainError;
use traq_service::{
    ChannelTreeService, ClipService, MessageService, ServiceError, SessionService,
};

// ============================================================================
// Channel Tree Tests
// ============================================================================

#[tokio::test]
async fn test_load_forest_builds_full_hierarchy() {
    let general = channel("general");
    let dev = child_channel("dev", &general);
    let times = child_channel("times", &dev);
    let random = channel("random");

    let backend = Arc::new(InMemoryBackend {
        channels: vec![times, random, dev, general],
        ..InMemoryBackend::new()
    });
    let ctx = test_context(backend);

    let forest = ChannelTreeService::new(&ctx).load_forest().await.unwrap();

    let names: Vec<&str> = forest.iter().map(|node| node.name()).collect();
    assert_eq!(names, vec!["general", "random"]);
    assert_eq!(forest[0].children[0].path, "/general/dev");
    assert_eq!(forest[0].children[0].children[0].path, "/general/dev/times");
}

#[tokio::test]
async fn test_load_forest_hides_archived_and_orphaned_channels() {
    let graveyard = archived_channel("graveyard");
    let buried = child_channel("buried", &graveyard);
    let general = channel("general");

    let backend = Arc::new(InMemoryBackend {
        channels: vec![graveyard, buried, general],
        ..InMemoryBackend::new()
    });
    let ctx = test_context(backend);

    let forest = ChannelTreeService::new(&ctx).load_forest().await.unwrap();

    let names: Vec<&str> = forest.iter().map(|node| node.name()).collect();
    assert_eq!(names, vec!["general"]);
}

#[tokio::test]
async fn test_load_subtree_scopes_paths_to_root() {
    let general = channel("general");
    let dev = child_channel("dev", &general);

    let backend = Arc::new(InMemoryBackend {
        channels: vec![general.clone(), dev],
        ..InMemoryBackend::new()
    });
    let ctx = test_context(backend);

    let forest = ChannelTreeService::new(&ctx)
        .load_subtree(general.id)
        .await
        .unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].path, "/dev");
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_rendered_messages_are_ascending_and_resolved() {
    let takashi = user("takashi");
    let general = channel("general");
    let buri = stamp("buri1");
    let stamp_id = buri.id;

    let mut backend = InMemoryBackend {
        channels: vec![general.clone()],
        stamps: vec![buri],
        users: vec![takashi.clone()],
        ..InMemoryBackend::new()
    };
    backend.add_messages(vec![
        message_at(&takashi, &general, "second :buri1:", 5),
        message_at(&takashi, &general, "first", 10),
    ]);
    let ctx = test_context(Arc::new(backend));

    let rendered = MessageService::new(&ctx)
        .rendered_messages(general.id)
        .await
        .unwrap();

    assert_eq!(rendered.len(), 2);
    // Oldest first, even though the endpoint serves newest first.
    assert_eq!(rendered[0].markdown, "first");
    assert_eq!(
        rendered[1].markdown,
        format!("second ![:buri1:]({TEST_SERVER_URL}/stamps/{stamp_id}/image)")
    );
    assert_eq!(rendered[0].author_handle, "@takashi");
    assert_eq!(
        rendered[0].permalink,
        format!("{TEST_SERVER_URL}/messages/{}", rendered[0].id)
    );
}

#[tokio::test]
async fn test_rendered_messages_with_unknown_author_fail() {
    let takashi = user("takashi");
    let general = channel("general");

    let mut backend = InMemoryBackend {
        channels: vec![general.clone()],
        ..InMemoryBackend::new()
    };
    // The author is never registered in the user snapshot.
    backend.add_messages(vec![message_at(&takashi, &general, "hello", 1)]);
    let ctx = test_context(Arc::new(backend));

    let err = MessageService::new(&ctx)
        .rendered_messages(general.id)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UserNotFound(id)) if id == takashi.id
    ));
}

// ============================================================================
// Clip Tests
// ============================================================================

#[tokio::test]
async fn test_clip_message_uses_first_folder() {
    let takashi = user("takashi");
    let first = clip_folder("bookmarks", &takashi);
    let second = clip_folder("later", &takashi);
    let first_id = first.id;

    let backend = Arc::new(InMemoryBackend {
        clip_folders: vec![first, second],
        ..InMemoryBackend::new()
    });
    let ctx = test_context(backend.clone());

    let message_id = uuid::Uuid::new_v4();
    let folder_id = ClipService::new(&ctx).clip_message(message_id).await.unwrap();

    assert_eq!(folder_id, first_id);
    assert_eq!(backend.recorded_clips(), vec![(first_id, message_id)]);
}

#[tokio::test]
async fn test_clip_message_without_folder_fails() {
    let backend = Arc::new(InMemoryBackend::new());
    let ctx = test_context(backend.clone());

    let err = ClipService::new(&ctx)
        .clip_message(uuid::Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { .. }));
    assert!(backend.recorded_clips().is_empty());
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_login_flow() {
    let suffix = unique_suffix();
    let name = format!("takashi{suffix}");
    let takashi = user(&name);

    let mut backend = InMemoryBackend::new();
    backend.add_account(takashi, "correct horse");
    let ctx = test_context(Arc::new(backend));
    let sessions = SessionService::new(&ctx);

    // No session before login.
    assert!(!sessions.restore().await.unwrap().is_logged_in());

    let state = sessions.login(&name, "correct horse").await.unwrap();
    assert!(state.is_logged_in());
    assert_eq!(state.current_user.unwrap().name, name);

    // The session now also restores.
    assert!(sessions.restore().await.unwrap().is_logged_in());
}

#[tokio::test]
async fn test_login_with_bad_password_fails() {
    let takashi = user("takashi");
    let mut backend = InMemoryBackend::new();
    backend.add_account(takashi, "correct horse");
    let ctx = test_context(Arc::new(backend));

    let err = SessionService::new(&ctx)
        .login("takashi", "battery staple")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_rejects_blank_credentials() {
    let ctx = test_context(Arc::new(InMemoryBackend::new()));

    let err = SessionService::new(&ctx).login("  ", "pw").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Full Client Flow
// ============================================================================

#[tokio::test]
async fn test_full_client_flow() {
    let takashi = user("takashi");
    let general = channel("general");
    let dev = child_channel("dev", &general);
    let folder = clip_folder("bookmarks", &takashi);

    let mut backend = InMemoryBackend {
        channels: vec![general.clone(), dev.clone()],
        stamps: vec![stamp("buri1")],
        clip_folders: vec![folder],
        ..InMemoryBackend::new()
    };
    backend.add_account(takashi.clone(), "pw");
    backend.add_messages(vec![message_at(&takashi, &dev, "ship it :buri1:", 3)]);
    let ctx = test_context(Arc::new(backend));

    // Log in, browse the tree, open a channel, read and clip a message.
    let state = SessionService::new(&ctx).login("takashi", "pw").await.unwrap();
    assert!(state.is_logged_in());

    let forest = ChannelTreeService::new(&ctx).load_forest().await.unwrap();
    let node = forest[0].find_by_path("/general/dev").unwrap();
    assert_eq!(
        ChannelTreeService::channel_title(&node.path),
        "#general/dev"
    );

    let rendered = MessageService::new(&ctx)
        .rendered_messages(node.channel.id)
        .await
        .unwrap();
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].markdown.contains("/stamps/"));

    ClipService::new(&ctx).clip_message(rendered[0].id).await.unwrap();
}
