use catalog::{OccasionCatalogue, SiteConfig};
use leptos::prelude::*;

/// Страницы сайта. Навигация без роутера: текущая страница хранится в контексте.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Gallery,
    Occasion(OccasionCatalogue),
    About,
    Contact,
}

impl Page {
    pub fn code(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Gallery => "gallery",
            Page::Occasion(catalogue) => catalogue.code(),
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    /// Неизвестный код ведёт на главную
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        match code {
            "gallery" | "shop" | "catalogues" => Page::Gallery,
            "about" => Page::About,
            "contact" => Page::Contact,
            _ => OccasionCatalogue::from_code(code)
                .map(Page::Occasion)
                .unwrap_or(Page::Home),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Gallery => "Shop",
            Page::Occasion(catalogue) => catalogue.title(),
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub menu_open: RwSignal<bool>,
    pub config: StoredValue<SiteConfig>,
}

impl AppGlobalContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            page: RwSignal::new(Page::Home),
            menu_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("Navigate to '{}'", page.code());
        self.page.set(page);
        self.menu_open.set(false);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }
}
