//! Snapshot tests for whole-file C# output.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use csgen_csharp::{
    Access, ConstructorDefinition, CsFile, FieldDefinition, Indent, IndexerDefinition,
    MethodDefinition, MethodKind, ParameterDefinition, PropertyDefinition, TypeDefinition,
    TypeKind,
};

fn render(file: &CsFile) -> String {
    file.render_with(Indent::SPACES_4).expect("file should render")
}

fn param(ty: &str, name: &str) -> ParameterDefinition {
    ParameterDefinition::new(ty, name).expect("valid parameter")
}

#[test]
fn test_player_behaviour() {
    let mut player = TypeDefinition::new(Access::Public, TypeKind::Class, "Player")
        .unwrap()
        .base_type("MonoBehaviour")
        .unwrap()
        .interface("IDamageable")
        .unwrap()
        .attribute("RequireComponent(typeof(Rigidbody))");

    player.add_fields([
        FieldDefinition::new(Access::Private, "float", "speed")
            .unwrap()
            .attribute("SerializeField"),
        FieldDefinition::new(Access::Private, "int", "health").unwrap(),
    ]);
    player.add_properties([
        PropertyDefinition::new(Access::Public, "int", "Health")
            .unwrap()
            .backing_field("health")
            .read_only(),
        PropertyDefinition::new(Access::Public, "float", "Speed")
            .unwrap()
            .backing_field("speed"),
    ]);
    player.add_methods([
        MethodDefinition::new(Access::Private, MethodKind::None, "void", "Awake")
            .unwrap()
            .body_line("health = 100;"),
        MethodDefinition::new(Access::Public, MethodKind::Virtual, "void", "TakeDamage")
            .unwrap()
            .param(param("int", "amount"))
            .body([
                "health -= amount;",
                "if (health <= 0) Destroy(gameObject);",
            ]),
    ]);

    let mut file = CsFile::new("Game.Actors").usings(["UnityEngine", "System"]);
    file.add_type(player);

    insta::assert_snapshot!("player_behaviour", render(&file));
}

#[test]
fn test_inventory_with_indexer() {
    let mut inventory = TypeDefinition::new(Access::Public, TypeKind::SealedClass, "Inventory")
        .unwrap()
        .base_type("ItemContainer")
        .unwrap();

    inventory.add_field(FieldDefinition::new(Access::Private, "Item[]", "slots").unwrap());
    inventory.add_property(
        PropertyDefinition::new(Access::Public, "int", "Capacity")
            .unwrap()
            .read_only(),
    );
    inventory.add_constructors([
        ConstructorDefinition::new(Access::Public)
            .param(param("int", "capacity"))
            .base_call(["capacity"])
            .body(["slots = new Item[capacity];", "Capacity = capacity;"]),
        ConstructorDefinition::new(Access::Public).base_call(Vec::<String>::new()),
    ]);
    inventory.add_indexer(
        IndexerDefinition::new(Access::Public, "Item", param("int", "slot"), "slots[slot]")
            .unwrap()
            .setter("slots[slot] = value"),
    );

    let mut slot = TypeDefinition::new(Access::Public, TypeKind::PartialStruct, "Slot").unwrap();
    slot.add_field(FieldDefinition::new(Access::Public, "int", "index").unwrap());

    let mut file = CsFile::new("Game.Items");
    file.add_types([inventory, slot]);

    insta::assert_snapshot!("inventory_with_indexer", render(&file));
}

#[test]
fn test_sanitized_member_names() {
    let mut settings = TypeDefinition::new(Access::Internal, TypeKind::StaticClass, "Settings")
        .unwrap();
    settings.add_fields([
        FieldDefinition::new(Access::Public, "string", "class").unwrap(),
        FieldDefinition::new(Access::Public, "int", "max players").unwrap(),
        FieldDefinition::new(Access::Public, "float", "2d-scale").unwrap(),
    ]);
    settings.add_method(
        MethodDefinition::new(Access::Public, MethodKind::Static, "", "Reload")
            .unwrap()
            .param(param("bool", "force"))
            .param(param("string", "default")),
    );

    let mut file = CsFile::new("Game.Config").using("System.IO");
    file.add_type(settings);

    insta::assert_snapshot!("sanitized_member_names", render(&file));
}
