/*
    Integration tests for the core_feed subsystem

    Test suite covering:
    - The full operation surface (tweets, likes, comments, profiles)
    - Change-event payloads and per-tweet ordering
    - Linearization under concurrent callers
    - Property-based laws (id contiguity, toggle idempotence)
*/

pub mod event_tests;
