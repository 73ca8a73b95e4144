pub mod click_reveal;
pub mod crossword;
pub mod reveal_slider;
pub mod timeline;
pub mod word_search;

pub use click_reveal::ClickReveal;
pub use crossword::Crossword;
pub use reveal_slider::RevealSlider;
pub use timeline::Timeline;
pub use word_search::WordSearch;
