use splinalg::assert_nearly_eq;
use splinalg::{ControlNet, Matrix, Tile, V3};

mod shared;
use self::shared::Environment;

// control points sampled from a smooth height field on the unit lattice
fn lattice_net<F>(x0: f64, y0: f64, p: F) -> ControlNet
where F: Fn(f64, f64) -> V3,
{
    ControlNet {
        a: p(x0, y0),
        b: p(x0 + 1.0, y0),
        c: p(x0 + 1.0, y0 + 1.0),
        d: p(x0, y0 + 1.0),
        e: p(x0, y0 - 1.0),
        f: p(x0 + 1.0, y0 - 1.0),
        g: p(x0 + 2.0, y0),
        h: p(x0 + 2.0, y0 + 1.0),
        i: p(x0 + 1.0, y0 + 2.0),
        j: p(x0, y0 + 2.0),
        k: p(x0 - 1.0, y0 + 1.0),
        l: p(x0 - 1.0, y0),
    }
}

fn saddle(x: f64, y: f64) -> V3
{ V3([x, y, 0.2 * (x * x - y * y)]) }

fn map_net<F>(net: &ControlNet, f: F) -> ControlNet
where F: Fn(V3) -> V3,
{
    ControlNet {
        a: f(net.a),
        b: f(net.b),
        c: f(net.c),
        d: f(net.d),
        e: f(net.e),
        f: f(net.f),
        g: f(net.g),
        h: f(net.h),
        i: f(net.i),
        j: f(net.j),
        k: f(net.k),
        l: f(net.l),
    }
}

#[test]
fn corners_are_interpolated() {
    Environment::init();

    let net = lattice_net(0.0, 0.0, saddle);
    let tile = Tile::from_net(&net);
    assert_nearly_eq!(tile.at(0.0, 0.0), net.a);
    assert_nearly_eq!(tile.at(1.0, 0.0), net.b);
    assert_nearly_eq!(tile.at(0.0, 1.0), net.d);
    assert_nearly_eq!(tile.at(1.0, 1.0), net.c);
}

#[test]
fn surface_moves_rigidly() {
    Environment::init();

    let net = lattice_net(0.0, 0.0, saddle);
    let tile = Tile::from_net(&net);

    // interpolation commutes with rigid motions of the control points
    let rot = &Matrix::rotate_x(5.0) * &Matrix::rotate_z(15.0);
    let center = V3([0.5, 0.5, 0.5]);
    let place = |p: V3| &rot * (p - center) + center;

    let moved = Tile::from_net(&map_net(&net, place));

    for &(u, v) in &[(0.0, 0.0), (0.5, 0.5), (0.25, 0.8), (1.0, 0.3)] {
        assert_nearly_eq!(moved.at(u, v), place(tile.at(u, v)));
        assert_nearly_eq!(moved.normal(u, v), &rot * tile.normal(u, v));
    }
}

#[test]
fn normals_stand_off_the_surface() {
    Environment::init();

    let tile = Tile::from_net(&lattice_net(0.0, 0.0, saddle));
    let (u, v) = (0.4, 0.7);

    let n = tile.normal(u, v);
    assert_nearly_eq!(n.norm(), 1.0);
    assert_nearly_eq!(V3::dot(&n, &tile.slope_u(u, v)), 0.0);
    assert_nearly_eq!(V3::dot(&n, &tile.slope_v(u, v)), 0.0);
}
