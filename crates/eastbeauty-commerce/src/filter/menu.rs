//! Header navigation menu.
//!
//! Only the clothing and cosmetics entries carry a category. Clicking any
//! other entry leaves the active filter alone.

use crate::catalog::Category;
use crate::filter::FilterSelector;
use serde::Serialize;

/// An entry of the header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub href: &'static str,
    pub category: Option<Category>,
}

impl MenuItem {
    const fn link(name: &'static str, href: &'static str) -> Self {
        Self {
            name,
            href,
            category: None,
        }
    }

    const fn category(name: &'static str, href: &'static str, category: Category) -> Self {
        Self {
            name,
            href,
            category: Some(category),
        }
    }
}

const NAVIGATION_MENU: [MenuItem; 8] = [
    MenuItem::link("Главная", "#home"),
    MenuItem::category("Одежда", "#clothing", Category::Clothing),
    MenuItem::category("Косметика", "#cosmetics", Category::Cosmetics),
    MenuItem::link("Коллекции", "#collections"),
    MenuItem::link("О бренде", "#about"),
    MenuItem::link("Контакты", "#contacts"),
    MenuItem::link("Доставка", "#delivery"),
    MenuItem::link("Блог", "#blog"),
];

/// The header menu in display order.
pub fn navigation_menu() -> &'static [MenuItem] {
    &NAVIGATION_MENU
}

impl FilterSelector {
    /// Apply a header menu click. Returns whether the filter changed.
    pub fn select_menu_item(&mut self, item: &MenuItem) -> bool {
        match item.category {
            Some(category) => self.set_active(category),
            None => false,
        }
    }
}
