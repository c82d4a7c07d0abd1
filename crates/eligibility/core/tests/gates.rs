use eligibility_core::{
    Catalog, EligibilityEngine, EngineConfig, FactionPolicyDefinition, ResourceCategory,
    ResourceKind, ResourceTags, RestrictionKind, SubjectDefinition, SubjectFlags,
};

fn item(id: &str, label: &str, tags: ResourceTags) -> ResourceCategory {
    ResourceCategory::new(id, ResourceKind::Item)
        .with_label(label)
        .with_tags(tags)
}

/// A small colony:
/// - Humans own power armor and rations
/// - Avians wear only approved apparel, nest and perch
/// - Dogs have no thoughts but may eat kibble
fn colony() -> Catalog {
    Catalog::new()
        .with_resource(item("PowerArmor", "power armor", ResourceTags::APPAREL))
        .with_resource(item("Parka", "parka", ResourceTags::APPAREL))
        .with_resource(item("FeatherCloak", "feather cloak", ResourceTags::APPAREL))
        .with_resource(item("Rifle", "rifle", ResourceTags::WEAPON))
        .with_resource(item("Rations", "rations", ResourceTags::INGESTIBLE))
        .with_resource(item("Kibble", "kibble", ResourceTags::INGESTIBLE))
        .with_resource(ResourceCategory::new("Nest", ResourceKind::Building))
        .with_resource(ResourceCategory::new("Workbench", ResourceKind::Building))
        .with_resource(ResourceCategory::new("Perch", ResourceKind::Bed))
        .with_resource(ResourceCategory::new("Nimble", ResourceKind::Trait))
        .with_resource(ResourceCategory::new("AteWithoutTable", ResourceKind::Thought))
        .with_resource(ResourceCategory::new("Thin", ResourceKind::BodyType))
        .with_resource(ResourceCategory::new("Hulk", ResourceKind::BodyType))
        .with_resource(ResourceCategory::new("Feathered", ResourceKind::BodyType))
        .with_resource(ResourceCategory::new("Fusion", ResourceKind::Research))
        .with_resource(ResourceCategory::new("Empire", ResourceKind::Faction))
        .with_subject(
            SubjectDefinition::new("Human")
                .restrict(RestrictionKind::Equipment, "PowerArmor")
                .restrict(RestrictionKind::Consumable, "Rations")
                .restrict(RestrictionKind::Consumable, "Kibble")
                .restrict(RestrictionKind::BuildingWhitelist, "Nest"),
        )
        .with_subject(
            SubjectDefinition::new("Avian")
                .with_label("avian")
                .with_flags(SubjectFlags::APPROVED_APPAREL_ONLY)
                .restrict(RestrictionKind::ApparelWhitelist, "FeatherCloak")
                .restrict(RestrictionKind::ApparelWhitelist, "PowerArmor")
                .restrict(RestrictionKind::ConsumableWhitelist, "Rations")
                .deny(RestrictionKind::Consumable, "Rations")
                .restrict(RestrictionKind::Building, "Nest")
                .restrict(RestrictionKind::Bed, "Perch")
                .restrict(RestrictionKind::BodyType, "Feathered")
                .deny(RestrictionKind::Trait, "Nimble")
                .deny(RestrictionKind::Thought, "AteWithoutTable")
                .with_body_type("Thin")
                .with_body_type("Feathered"),
        )
        .with_subject(
            SubjectDefinition::new("Dog")
                .with_flags(SubjectFlags::NO_THOUGHTS)
                .restrict(RestrictionKind::ConsumableWhitelist, "Kibble")
                .deny(RestrictionKind::Equipment, "Parka"),
        )
        .with_faction(FactionPolicyDefinition::new("Empire").deny("Fusion", true))
}

fn engine() -> EligibilityEngine {
    let (engine, report) = EligibilityEngine::with_catalog(EngineConfig::new(), &colony());
    assert!(report.is_clean(), "unexpected skips: {:?}", report.skipped);
    engine
}

#[test]
fn approved_apparel_only_subjects_wear_only_their_whitelist() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_equip("FeatherCloak", "Avian").is_ok());
    // The whitelist grants past the equipment restriction.
    assert!(gates.can_equip("PowerArmor", "Avian").is_ok());

    let denial = gates
        .can_equip("Parka", "Avian")
        .expect_err("parka is not approved");
    assert_eq!(denial.kind, RestrictionKind::ApparelWhitelist);
    assert_eq!(denial.to_string(), "avian cannot wear parka");

    // Weapons are not apparel; only equipment restrictions apply.
    assert!(gates.can_equip("Rifle", "Avian").is_ok());
}

#[test]
fn other_subjects_fall_through_to_equipment_restrictions() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_equip("Parka", "Human").is_ok());
    assert!(gates.can_equip("PowerArmor", "Human").is_ok());
    // Someone else's whitelist entry does not restrict anybody.
    assert!(gates.can_equip("FeatherCloak", "Human").is_ok());

    let denial = gates
        .can_equip("PowerArmor", "Dog")
        .expect_err("power armor is restricted to humans");
    assert_eq!(denial.kind, RestrictionKind::Equipment);
    assert_eq!(denial.to_string(), "Dog cannot wear power armor");

    assert!(gates.can_equip("Parka", "Dog").is_err());
}

/// Without whitelist tables nobody is whitelisted; the restriction tables
/// still answer, and strict kinds do not trip on the missing whitelist.
#[test]
fn disabled_whitelist_tables_grant_nothing() {
    let config = EngineConfig::new()
        .with_kinds([RestrictionKind::Equipment, RestrictionKind::Consumable]);
    let (engine, report) = EligibilityEngine::with_catalog(config, &colony());
    assert!(report.is_clean(), "unexpected skips: {:?}", report.skipped);
    let gates = engine.gates();

    assert!(gates.can_equip("PowerArmor", "Human").is_ok());
    let denial = gates.can_equip("PowerArmor", "Dog").expect_err("restricted to humans");
    assert_eq!(denial.kind, RestrictionKind::Equipment);
    // Approved-apparel-only subjects have no whitelist to wear from.
    let denial = gates.can_equip("PowerArmor", "Avian").expect_err("no whitelist");
    assert_eq!(denial.kind, RestrictionKind::ApparelWhitelist);

    assert!(gates.can_eat("Kibble", "Human").is_ok());
    let denial = gates.can_eat("Kibble", "Dog").expect_err("kibble is restricted to humans");
    assert_eq!(denial.kind, RestrictionKind::Consumable);
}

#[test]
fn eating_combines_restrictions_and_whitelist() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_eat("Rations", "Human").is_ok());
    assert!(gates.can_eat("Kibble", "Dog").is_ok());
    assert!(gates.can_eat("Kibble", "Avian").is_err());
    assert!(gates.can_eat("Rations", "Dog").is_err());

    // A subject denial beats the subject's own whitelist entry.
    let denial = gates.can_eat("Rations", "Avian").expect_err("denied");
    assert_eq!(denial.to_string(), "avian cannot eat rations");
}

#[test]
fn building_honours_the_building_whitelist() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_build("Nest", "Avian").is_ok());
    assert!(gates.can_build("Nest", "Human").is_ok());
    assert!(gates.can_build("Nest", "Dog").is_err());
    assert!(gates.can_build("Workbench", "Dog").is_ok());
}

#[test]
fn single_kind_gates() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_use_bed("Perch", "Avian").is_ok());
    assert_eq!(
        gates
            .can_use_bed("Perch", "Human")
            .expect_err("perch is avian only")
            .to_string(),
        "Human cannot sleep in Perch"
    );

    assert!(gates.can_gain_trait("Nimble", "Human").is_ok());
    assert!(gates.can_gain_trait("Nimble", "Avian").is_err());
}

#[test]
fn thoughts_respect_flags_and_denials() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_have_thought("AteWithoutTable", "Human").is_ok());
    assert!(gates.can_have_thought("AteWithoutTable", "Avian").is_err());
    assert_eq!(
        gates
            .can_have_thought("AteWithoutTable", "Dog")
            .expect_err("dogs have no thoughts")
            .kind,
        RestrictionKind::Thought
    );
}

#[test]
fn body_types_check_restrictions_and_the_subject_list() {
    let engine = engine();
    let gates = engine.gates();

    assert!(gates.can_have_body_type("Thin", "Avian").is_ok());
    assert!(gates.can_have_body_type("Feathered", "Avian").is_ok());
    assert!(gates.can_have_body_type("Hulk", "Avian").is_err());

    // Humans list no body types, so only the restriction table counts.
    assert!(gates.can_have_body_type("Hulk", "Human").is_ok());
    assert!(gates.can_have_body_type("Feathered", "Human").is_err());
}

#[test]
fn research_is_narrowed_by_faction_until_hacked() {
    let engine = engine();

    assert!(engine.gates().can_research("Fusion", "Human", None).is_ok());
    assert!(
        engine
            .gates()
            .can_research("Fusion", "Human", Some("Empire"))
            .is_err()
    );

    engine.set_hacked("Fusion", true);
    assert!(
        engine
            .gates()
            .can_research("Fusion", "Human", Some("Empire"))
            .is_ok()
    );
}
