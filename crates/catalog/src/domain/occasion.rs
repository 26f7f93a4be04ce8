use super::decorated::{DecoratedProduct, Price};
use super::product::Product;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Тематические каталоги с фиксированным ассортиментом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccasionCatalogue {
    Atk,
    Artificial,
    Graduation,
    Lego,
    Money,
    TeachersDay,
}

// (id, название, цена в центах, описание)
type Item = (u32, &'static str, u32, &'static str);

const ATK_ITEMS: &[Item] = &[
    (501, "ATK Special Rose", 15999, "Signature ATK rose arrangement"),
    (502, "ATK Premium Mix", 22999, "Premium mixed flower ATK bouquet"),
    (503, "ATK Elegant White", 18999, "Pure white flowers in ATK style"),
    (504, "ATK Romantic Red", 19999, "Passionate red roses ATK arrangement"),
    (505, "ATK Pastel Dream", 17999, "Soft pastel colors in ATK design"),
    (506, "ATK Luxury Collection", 29999, "Ultimate luxury ATK bouquet"),
];

const ARTIFICIAL_ITEMS: &[Item] = &[
    (101, "Silk Rose Elegance", 8999, "Premium silk roses in classic arrangement"),
    (102, "Forever Peony", 12999, "Lifelike peonies that last forever"),
    (103, "Artificial Sunflower", 7599, "Bright artificial sunflowers"),
    (104, "Mixed Silk Bouquet", 15999, "Variety of silk flowers in elegant design"),
    (105, "Faux Orchid Arrangement", 19599, "Sophisticated artificial orchids"),
    (106, "Silk Tulip Bundle", 6599, "Colorful artificial tulips"),
];

const GRADUATION_ITEMS: &[Item] = &[
    (301, "Graduation Cap Bouquet", 8999, "Flowers arranged in graduation cap design"),
    (302, "Diploma Rose Bundle", 12999, "Roses with miniature diploma scroll"),
    (303, "School Colors Arrangement", 9999, "Flowers in your school colors"),
    (304, "Achievement Sunflowers", 7999, "Bright sunflowers for celebration"),
    (305, "Success Lily Bouquet", 14999, "Elegant lilies for graduation success"),
    (306, "Future Bright Roses", 11999, "Mixed roses for bright future ahead"),
];

const LEGO_ITEMS: &[Item] = &[
    (401, "LEGO Rose Bouquet", 19999, "Buildable LEGO roses that last forever"),
    (402, "Brick Flower Garden", 29999, "Complete LEGO flower garden set"),
    (403, "LEGO Sunflower", 14999, "Large buildable LEGO sunflower"),
    (404, "Mini LEGO Bouquet", 8999, "Small LEGO flower arrangement"),
    (405, "LEGO Tulip Set", 17999, "Colorful buildable LEGO tulips"),
    (406, "Custom LEGO Flowers", 24999, "Personalized LEGO flower creation"),
];

const MONEY_ITEMS: &[Item] = &[
    (201, "Cash Rose Bouquet", 29999, "Elegant roses with cash bills arrangement"),
    (202, "Money Tree Deluxe", 45999, "Premium money tree with fresh flowers"),
    (203, "Dollar Bill Roses", 19999, "Creative roses made from dollar bills"),
    (204, "Graduation Money Lei", 14999, "Traditional lei with money and flowers"),
    (205, "Cash & Carnations", 17999, "Beautiful carnations with cash accents"),
    (206, "Money Sunflower", 22999, "Sunflower arrangement with money petals"),
];

const TEACHERS_DAY_ITEMS: &[Item] = &[
    (601, "Thank You Teacher", 7999, "Appreciation bouquet for teachers"),
    (602, "Apple Blossom Special", 9999, "Apple-themed arrangement for educators"),
    (603, "Wisdom Roses", 11999, "Elegant roses to honor teachers"),
    (604, "Knowledge Sunflowers", 8999, "Bright sunflowers for bright minds"),
    (605, "Educator's Choice", 14999, "Premium mixed bouquet for teachers"),
    (606, "Classroom Carnations", 6999, "Cheerful carnations for the classroom"),
];

impl OccasionCatalogue {
    /// Код каталога (используется в навигации)
    pub fn code(&self) -> &'static str {
        match self {
            OccasionCatalogue::Atk => "atk",
            OccasionCatalogue::Artificial => "artificial",
            OccasionCatalogue::Graduation => "graduation",
            OccasionCatalogue::Lego => "lego",
            OccasionCatalogue::Money => "money",
            OccasionCatalogue::TeachersDay => "teachers-day",
        }
    }

    /// Заголовок страницы каталога
    pub fn title(&self) -> &'static str {
        match self {
            OccasionCatalogue::Atk => "ATK Bouquets",
            OccasionCatalogue::Artificial => "Artificial Bouquets",
            OccasionCatalogue::Graduation => "Graduation Collection",
            OccasionCatalogue::Lego => "LEGO Bouquets",
            OccasionCatalogue::Money => "Money Bouquets",
            OccasionCatalogue::TeachersDay => "Teachers Day Collection",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            OccasionCatalogue::Atk => "Signature ATK-style arrangements for every occasion",
            OccasionCatalogue::Artificial => "Everlasting silk and faux flowers that never wilt",
            OccasionCatalogue::Graduation => "Celebrate achievements with graduation bouquets",
            OccasionCatalogue::Lego => "Buildable flowers that last forever",
            OccasionCatalogue::Money => {
                "Unique floral arrangements incorporating cash for special celebrations"
            }
            OccasionCatalogue::TeachersDay => {
                "Show appreciation to educators with our special Teachers Day bouquets"
            }
        }
    }

    /// Папка с фотографиями работ для этого каталога, если она есть.
    /// Фото в ней упорядочены по числовому префиксу имени файла.
    pub fn asset_folder(&self) -> Option<&'static str> {
        match self {
            OccasionCatalogue::Money => Some("Money Bouquet"),
            _ => None,
        }
    }

    /// Получить все каталоги
    pub fn all() -> Vec<OccasionCatalogue> {
        vec![
            OccasionCatalogue::Atk,
            OccasionCatalogue::Artificial,
            OccasionCatalogue::Graduation,
            OccasionCatalogue::Lego,
            OccasionCatalogue::Money,
            OccasionCatalogue::TeachersDay,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "atk" => Some(OccasionCatalogue::Atk),
            "artificial" => Some(OccasionCatalogue::Artificial),
            "graduation" => Some(OccasionCatalogue::Graduation),
            "lego" => Some(OccasionCatalogue::Lego),
            "money" => Some(OccasionCatalogue::Money),
            "teachers-day" => Some(OccasionCatalogue::TeachersDay),
            _ => None,
        }
    }

    pub fn parse(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| CatalogError::UnknownCatalogue(code.to_string()))
    }

    fn items(&self) -> &'static [Item] {
        match self {
            OccasionCatalogue::Atk => ATK_ITEMS,
            OccasionCatalogue::Artificial => ARTIFICIAL_ITEMS,
            OccasionCatalogue::Graduation => GRADUATION_ITEMS,
            OccasionCatalogue::Lego => LEGO_ITEMS,
            OccasionCatalogue::Money => MONEY_ITEMS,
            OccasionCatalogue::TeachersDay => TEACHERS_DAY_ITEMS,
        }
    }

    /// Ассортимент каталога. Изображений у этих товаров нет,
    /// витрина показывает заглушку.
    pub fn products(&self) -> Vec<DecoratedProduct> {
        self.items()
            .iter()
            .map(|&(id, name, cents, description)| DecoratedProduct {
                product: Product::new(id, self.title(), String::new()),
                title: Some(name.to_string()),
                price: Some(Price::from_cents(cents)),
                description: Some(description.to_string()),
                filename: None,
            })
            .collect()
    }
}

impl ToString for OccasionCatalogue {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_round_trip_for_all() {
        for c in OccasionCatalogue::all() {
            assert_eq!(OccasionCatalogue::from_code(c.code()), Some(c));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            OccasionCatalogue::parse("wedding"),
            Err(CatalogError::UnknownCatalogue("wedding".to_string()))
        );
        assert_eq!(OccasionCatalogue::parse(" money "), Ok(OccasionCatalogue::Money));
    }

    #[test]
    fn test_products_have_unique_ids_across_catalogues() {
        let mut ids = HashSet::new();
        for c in OccasionCatalogue::all() {
            let products = c.products();
            assert_eq!(products.len(), 6);
            for p in products {
                assert!(ids.insert(p.id()), "duplicate id {}", p.id());
                assert_eq!(p.product.category, c.title());
                assert!(p.price.is_some());
            }
        }
    }

    #[test]
    fn test_asset_folder() {
        assert_eq!(OccasionCatalogue::Money.asset_folder(), Some("Money Bouquet"));
        assert_eq!(OccasionCatalogue::Lego.asset_folder(), None);
    }

    #[test]
    fn test_money_catalogue_prices() {
        let products = OccasionCatalogue::Money.products();
        assert_eq!(products[0].title.as_deref(), Some("Cash Rose Bouquet"));
        assert_eq!(products[0].price.map(|p| p.to_string()).as_deref(), Some("$299.99"));
        assert_eq!(products[1].price, Some(Price::from_cents(45999)));
    }
}
