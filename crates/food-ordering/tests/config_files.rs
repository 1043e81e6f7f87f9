//! Loading and saving ordering config files.

use food_ordering::prelude::*;

#[test]
fn load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordering.toml");
    std::fs::write(
        &path,
        r#"
store_name = "Tiffin Box"
guest_label = "Visitor"

[[menu]]
id = 7
name = "Idli"
price = 60
description = "Steamed rice cakes"
"#,
    )
    .unwrap();

    let config = OrderingConfig::load(&path).unwrap();
    let mut ordering = OrderingFacade::from_config(&config).unwrap();

    assert_eq!(ordering.nav_bar().brand, "Tiffin Box");
    assert_eq!(ordering.nav_bar().user_label, "Visitor");
    assert_eq!(ordering.browse_menu().len(), 1);

    let snapshot = ordering.add_to_cart_by_id(MenuItemId::new(7)).unwrap();
    assert_eq!(snapshot.total, Money::new(60, Currency::INR));
}

#[test]
fn save_and_reload_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordering.json");
    let config = OrderingConfig {
        currency: "USD".to_string(),
        logout_cart_policy: CartPolicy::Clear,
        menu: Some(vec![MenuItemConfig {
            id: 1,
            name: "Soup".to_string(),
            price: 450,
            description: String::new(),
        }]),
        ..OrderingConfig::default()
    };

    config.save(&path).unwrap();
    let loaded = OrderingConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn save_and_reload_toml_with_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordering.toml");
    let config = OrderingConfig {
        menu: Some(vec![
            MenuItemConfig {
                id: 1,
                name: "Vada".to_string(),
                price: 40,
                description: "Crispy".to_string(),
            },
            MenuItemConfig {
                id: 2,
                name: "Chai".to_string(),
                price: 20,
                description: String::new(),
            },
        ]),
        ..OrderingConfig::default()
    };

    config.save(&path).unwrap();

    assert_eq!(OrderingConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_reports_path() {
    let err = OrderingConfig::load("/nonexistent/ordering.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/ordering.toml"));
}

#[test]
fn invalid_menu_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordering.toml");
    std::fs::write(
        &path,
        r#"
[[menu]]
id = 1
name = "A"
price = 1

[[menu]]
id = 1
name = "B"
price = 2
"#,
    )
    .unwrap();

    let err = OrderingConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
    assert!(format!("{err:#}").contains("Duplicate menu item id: 1"));
}
