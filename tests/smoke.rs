use glam::{Vec2, Vec3};
use meshpick_geometry::{Ray, Triangle};
use meshpick_picking::Raycaster;
use meshpick_scene::{Color, Scene, SceneObject};
use meshpick_testkit::{front_camera, unit_triangle, JsonlSink, PickRecord};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn ray_hits_inside_and_misses_outside_unit_triangle() {
    let down = Vec3::new(0.0, 0.0, -1.0);
    let triangle = unit_triangle();
    assert_eq!(triangle.normal(), Vec3::Z);

    let hit = Ray::new(Vec3::new(0.2, 0.2, 1.0), down).intersect_triangle(&triangle);
    assert_eq!(hit, Some(Vec3::new(0.2, 0.2, 0.0)));

    let miss = Ray::new(Vec3::new(0.8, 0.8, 1.0), down).intersect_triangle(&triangle);
    assert_eq!(miss, None);
}

#[test]
fn swapped_winding_flips_normal_but_not_hit() {
    let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));
    let front = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let back = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
    assert_eq!(front.normal(), -back.normal());
    assert_eq!(ray.intersect_triangle(&front), ray.intersect_triangle(&back));
}

#[test]
fn camera_pick_records_hit_names() {
    let scene: Scene = [
        SceneObject::square("left", Vec3::new(-2.5, -0.5, 0.0), 1.0, Color::WHITE),
        SceneObject::square("middle", Vec3::new(-0.5, -0.5, 0.0), 1.0, Color::WHITE),
    ]
    .into_iter()
    .collect::<Result<_, _>>()
    .expect("valid squares");

    let camera = front_camera();
    let mut raycaster = Raycaster::new(camera.position, camera.forward());
    raycaster.set_from_camera(Vec2::ZERO, &camera.view_matrix(), &camera.projection_matrix());

    let hits: Vec<String> = raycaster
        .intersects_objects(scene.objects())
        .iter()
        .map(|o| o.name().to_string())
        .collect();
    assert_eq!(hits, ["middle"]);

    let path = std::env::temp_dir().join(format!(
        "meshpick-smoke-{}.jsonl",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let mut sink = JsonlSink::create(&path).expect("can create temp log");
    sink.write(&PickRecord {
        query: "center".into(),
        coords: [0.0, 0.0],
        hits,
        indices: raycaster.intersects_indices(scene.objects()),
    })
    .expect("can write record");
    drop(sink);

    let line = std::fs::read_to_string(&path).expect("record readable");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("valid json");
    assert_eq!(value["hits"][0], "middle");
    assert_eq!(value["query"], "center");
    assert_eq!(value["indices"], serde_json::json!([1]));
}
