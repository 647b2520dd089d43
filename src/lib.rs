pub mod math {
    pub mod approx_eq;
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod camera;
    pub mod canvas;
    pub mod intersection;
    pub mod ray;
    pub mod shader;
}

pub mod scene {
    pub mod light;
    pub mod material;
    pub mod shape;
    pub mod sphere;
    pub mod world;
    pub mod yaml;
}

pub mod demos {
    pub mod blue_ball;
    pub mod clock;
    pub mod projectile;
    pub mod silhouette;
}
