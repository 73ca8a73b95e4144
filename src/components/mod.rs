pub mod answer_box;
pub mod app;
pub mod celebration_overlay;
pub mod crossword_view;
pub mod final_view;
pub mod level_view;
pub mod progress_bar;
pub mod reveal_view;
pub mod slider_view;
pub mod start_screen;
pub mod story_view;
pub mod timeline_view;
pub mod word_search_view;
pub mod words_display;
