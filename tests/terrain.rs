use hedron::{AttributeType, AttributeUsage, Mode};
use strata::terrain;

#[test]
fn built_in_terrain_is_well_formed() {
    let geo = strata::terrain_geometry().unwrap();
    geo.validate().unwrap();
    assert_eq!(geo.mode(), Mode::Triangles);

    let vertices = geo[AttributeUsage::Position].len() / 3;
    assert!(vertices > 0);
    assert_eq!(geo[AttributeUsage::Position].attr_type(), AttributeType::Vec3);
    assert_eq!(geo[AttributeUsage::Normal].len(), vertices * 3);
    assert_eq!(geo[AttributeUsage::Texcoord(0)].len(), vertices * 2);
    assert_eq!(geo.index().len() % 3, 0);
    assert!(geo.index().iter().all(|&i| (i as usize) < vertices));
}

#[test]
fn built_in_terrain_is_shared() {
    let a = strata::terrain_geometry().unwrap();
    let b = terrain::provider().get().unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(terrain::provider().build_count(), 1);
}

#[test]
fn built_in_terrain_matches_its_source() {
    let geo = strata::terrain_geometry().unwrap();
    let source = terrain::source();
    assert_eq!(geo[AttributeUsage::Position].len(), source.position.len());
    assert_eq!(geo.index().len(), source.index.len());
    assert_eq!(*geo, source.pack());
}

#[test]
fn built_in_terrain_normals_are_unit() {
    let geo = strata::terrain_geometry().unwrap();
    let normal = geo.normal().unwrap();
    assert_eq!(normal, &geo[AttributeUsage::Normal]);
    let normals = normal.iter::<hedron::Normal>().unwrap();
    for n in normals {
        assert!((n.norm() - 1.0).abs() < 1e-6, "{n:?}");
    }
}

#[test]
fn built_in_terrain_bounds() {
    let bounds = strata::terrain_geometry().unwrap().bounds().unwrap();
    assert_eq!(bounds.mins, nalgebra::point![-1.0, -0.5, -1.0]);
    assert_eq!(bounds.maxs, nalgebra::point![1.0, 0.5, 1.0]);
}
