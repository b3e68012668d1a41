// Headless walkthrough of the inspector tab over the drag-drop demo scene.
// Run with RUST_LOG=debug to watch the mirror bookkeeping.

use anyhow::Result;
use log::info;
use pulse_debug::{InspectorTab, PanelTab, TextView};
use pulse_nodes::{Node, PropertyValue, Size, Vector2};
use pulse_scene::Engine;
use serde_json::json;

fn build_demo_scene(engine: &mut Engine) -> Result<()> {
    let graph = engine.graph_mut();
    graph.add_scene(Node::scene("Cybertron"))?;
    graph.add_child("Cybertron", Node::layer("world"))?;

    let mut drop_area = Node::visual("dropArea");
    drop_area.set_property("position", Vector2::new(400.0, 150.0));
    drop_area.set_property("size", Size::new(250.0, 250.0));
    graph.add_child("world", drop_area)?;

    let mut drag_box = Node::visual("dragBox");
    drag_box.set_property("position", PropertyValue::from_json(json!({ "x": 35, "y": 325 })));
    drag_box.set_property("size", Size::new(50.0, 50.0));
    drag_box.set_property("zindex", 2);
    graph.add_child("world", drag_box)?;

    // The accept/revoke markers start hidden in the demo.
    let mut drag_accept = Node::visual("dragAccept");
    drag_accept.visible = false;
    graph.add_child("world", drag_accept)?;

    let mut drag_revoke = Node::visual("dragRevoke");
    drag_revoke.visible = false;
    graph.add_child("world", drag_revoke)?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = Engine::new();
    build_demo_scene(&mut engine)?;

    let mut inspector = InspectorTab::new(TextView::new());
    inspector.show();
    inspector.resize(130.0);

    // The engine reports membership top-down; the scene entry carries the
    // whole hierarchy with it.
    inspector.add_node(&engine, "Cybertron");

    engine.activate_scene("Cybertron");
    inspector.set_engine(&engine);

    println!("--- after binding ---");
    print!("{}", inspector.view().render());

    inspector.select_node(&engine, "dragBox");
    println!("--- dragBox selected ---");
    print!("{}", inspector.view().render());

    inspector.toggle_node(&mut engine, "dragBox");
    inspector.toggle_debug(&mut engine, "dragBox");
    println!("--- dragBox hidden, outline on ---");
    print!("{}", inspector.view().render());

    inspector.toggle_node(&mut engine, "Cybertron");
    println!("--- scene deactivated ---");
    print!("{}", inspector.view().render());

    // A few frames of the loop; the inspector's tick is an inert hook.
    for _ in 0..3 {
        engine.tick(16.0);
        inspector.update(16.0);
    }
    info!("master time: {:.1} ms", engine.master_time());

    Ok(())
}
