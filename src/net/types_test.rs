use super::*;

fn product_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "p1",
        "nombre": "Mate imperial",
        "descripcion": "Mate de calabaza forrado en cuero",
        "precio": 100.0,
        "stock": 5,
        "categoria": "Hogar",
        "imagen": "http://img/p1.png",
        "activo": true,
        "promocion": {
            "activa": true,
            "tipo": "porcentaje",
            "valor": 10,
            "fechaInicio": "2026-01-01",
            "fechaFin": null
        },
        "precioConDescuento": 90.0,
        "promocionVigente": true
    })
}

#[test]
fn product_deserializes_server_field_names() {
    let p: Product = serde_json::from_value(product_json()).unwrap();
    assert_eq!(p.id, "p1");
    assert_eq!(p.precio_con_descuento, Some(90.0));
    assert!(p.promocion_vigente);
    let promo = p.promocion.unwrap();
    assert_eq!(promo.tipo, PromoTipo::Porcentaje);
    assert_eq!(promo.fecha_inicio.as_deref(), Some("2026-01-01"));
    assert!(promo.fecha_fin.is_none());
}

#[test]
fn product_defaults_for_optional_fields() {
    let p: Product = serde_json::from_value(serde_json::json!({
        "_id": "p2",
        "nombre": "Yerba",
        "precio": 10.0
    }))
    .unwrap();
    assert!(p.activo);
    assert!(p.promocion.is_none());
    assert!(!p.promocion_vigente);
    assert_eq!(p.stock, 0);
    assert_eq!(p.categoria, "");
}

#[test]
fn empty_category_displays_as_general() {
    let mut p: Product = serde_json::from_value(product_json()).unwrap();
    p.categoria = String::new();
    assert_eq!(p.display_categoria(), "General");
    p.categoria = "  ".to_owned();
    assert_eq!(p.display_categoria(), "General");
    p.categoria = "Hogar".to_owned();
    assert_eq!(p.display_categoria(), "Hogar");
}

#[test]
fn precio_final_only_discounts_when_vigente() {
    let mut p: Product = serde_json::from_value(product_json()).unwrap();
    assert_eq!(p.precio_final(), 90.0);
    p.promocion_vigente = false;
    assert_eq!(p.precio_final(), 100.0);
}

#[test]
fn promo_tipo_round_trips_wire_names() {
    assert_eq!(serde_json::to_value(PromoTipo::Porcentaje).unwrap(), "porcentaje");
    assert_eq!(serde_json::to_value(PromoTipo::MontoFijo).unwrap(), "monto_fijo");
    let t: PromoTipo = serde_json::from_value(serde_json::json!("monto_fijo")).unwrap();
    assert_eq!(t, PromoTipo::MontoFijo);
}

#[test]
fn user_accepts_mongo_id_alias() {
    let u: User = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "email": "a@b.c",
        "rol": "admin"
    }))
    .unwrap();
    assert_eq!(u.id, "u1");
    assert!(u.nombre.is_none());
}
