use wiretype::{
    codec::WireConfig,
    core::model::{ModelError, NameMap},
};
use wiretype_testing_fixtures::{
    COLOR, LOCATION, POINT, SHAPE, SKETCH, check_declarations, declarations,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn assert_bijective(names: &NameMap, attrs: impl IntoIterator<Item = &'static str>) {
    for attr in attrs {
        let wire = names.behind_name(attr);

        assert_eq!(
            names.attribute_name(wire),
            Some(attr),
            "{attr} -> {wire} does not resolve back"
        );
        if !names.is_aliased(attr) {
            assert_eq!(wire, attr, "{attr} has no alias but changed on the wire");
        }
    }
}

#[test]
fn fixtures_pass_declaration_checks() {
    init_tracing();

    assert_eq!(check_declarations(&WireConfig::default()), Ok(()));
    assert_eq!(declarations().len(), 9);
}

#[test]
fn name_maps_are_bijective() {
    assert_bijective(&POINT.names, POINT.fields.iter().map(|f| f.name));
    assert_bijective(&LOCATION.names, LOCATION.fields.iter().map(|f| f.name));
    assert_bijective(&SKETCH.names, SKETCH.fields.iter().map(|f| f.name));
    assert_bijective(&SHAPE.tag_names, SHAPE.tags.iter().map(|t| t.name));
    assert_bijective(&COLOR.names, COLOR.members.iter().copied());

    for tag in SHAPE.tags {
        assert_bijective(&tag.names, tag.fields.iter().map(|f| f.name));
    }
}

#[test]
fn aliases_resolve_as_declared() {
    assert_eq!(POINT.names.behind_name("left"), "x");
    assert_eq!(POINT.names.attribute_name("x"), Some("left"));
    assert_eq!(SKETCH.names.behind_name("type_"), "type");
    assert_eq!(COLOR.names.behind_name("blue"), "navy");
}

#[test]
fn discriminator_key_may_not_shadow_a_field() {
    init_tracing();

    // Sketch carries a field named `type` on the wire
    let config = WireConfig::from_toml("type_key = \"type\"\n").expect("config");
    let err = check_declarations(&config).unwrap_err();

    assert_eq!(
        err,
        ModelError::ReservedKey {
            model: "fixtures::Sketch",
            name: "type_",
            wire: "type",
        }
    );
}
