pub mod stream_events;
