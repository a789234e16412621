//! Compiled-in storefront products.

use crate::catalog::{Category, Product};
use crate::money::Money;

const MEDIA_ROOT: &str =
    "https://cdn.poehali.dev/projects/6bd94170-99c2-4006-a6a4-f385facbf1d1/files";

const QIPAO_IMAGE: &str = "84b214b9-94bc-4c97-8647-ae29c68f1c18.jpg";
const SKINCARE_IMAGE: &str = "2ae86830-e816-404c-b387-98eb13c73bb8.jpg";
const HOODIE_IMAGE: &str = "c8becdde-8604-49db-83b5-17eb9daaa59c.jpg";

fn listed(
    id: u32,
    name: &str,
    price: u64,
    category: Category,
    description: &str,
    image: &str,
) -> Product {
    Product::new(id, name, Money::rub(price), category)
        .with_description(description)
        .with_image(format!("{MEDIA_ROOT}/{image}"))
}

/// The six products listed on the storefront, in grid order.
pub(crate) fn storefront_products() -> Vec<Product> {
    vec![
        listed(
            1,
            "Традиционное Ципао",
            8900,
            Category::Clothing,
            "Элегантное шёлковое платье с цветочным узором",
            QIPAO_IMAGE,
        ),
        listed(
            2,
            "Набор для ухода за кожей",
            3200,
            Category::Cosmetics,
            "Роллер из нефрита и эссенция зелёного чая",
            SKINCARE_IMAGE,
        ),
        listed(
            3,
            "Худи с драконом",
            5400,
            Category::Clothing,
            "Современная уличная мода с восточными мотивами",
            HOODIE_IMAGE,
        ),
        listed(
            4,
            "Тушь для ресниц \"Бамбук\"",
            1450,
            Category::Cosmetics,
            "Натуральные компоненты для объёма",
            SKINCARE_IMAGE,
        ),
        listed(
            5,
            "Льняная рубашка Ханьфу",
            6700,
            Category::Clothing,
            "Традиционный крой с современным кроем",
            QIPAO_IMAGE,
        ),
        listed(
            6,
            "Сыворотка с рисом",
            2800,
            Category::Cosmetics,
            "Увлажнение и сияние кожи",
            SKINCARE_IMAGE,
        ),
    ]
}
