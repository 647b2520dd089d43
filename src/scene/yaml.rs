use std::{cell::Cell, collections::HashMap, fmt::Display, path::Path};

use log::{debug, warn};
use saphyr::Yaml;

use crate::{
    math::{
        color::Color,
        matrix::Matrix,
        point::Point,
        transform::Transformation,
        tuple::{Axis, Tuple},
    },
    render::{
        camera::Camera,
        shader::{PointLightShader, Shader, SilhouetteShader},
    },
};

use super::{
    light::PointLight,
    material::{Material, MaterialBuilder},
    shape::ObjectTransform,
    sphere::Sphere,
    world::World,
};

/// Camera settings of a scene file. Kept apart from `Camera` so the command line can override them.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub width: usize,
    pub height: usize,
    pub transformation: Matrix,
}

impl CameraConfig {
    pub const DEFAULT_SIZE: usize = 200;
    /// Largest accepted width or height, in pixels.
    pub const MAX_SIZE: usize = 1 << 15;

    /// Rejects image sizes that are empty, over `MAX_SIZE` or whose pixel count overflows.
    pub fn check_size(width: usize, height: usize) -> Result<(), String> {
        if width == 0 || height == 0 {
            return Err(format!("image dimensions must be positive, got {width}x{height}"));
        }
        if width > Self::MAX_SIZE || height > Self::MAX_SIZE {
            return Err(format!(
                "image dimensions must be at most {}, got {width}x{height}",
                Self::MAX_SIZE
            ));
        }
        if width.checked_mul(height).is_none() {
            return Err(format!("image of {width}x{height} pixels is too large"));
        }
        Ok(())
    }

    pub fn build(&self) -> Camera {
        Camera::with_transformation(self.width, self.height, self.transformation.clone())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            transformation: Matrix::identity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShaderConfig {
    Silhouette(Color),
    #[default]
    Phong,
}

impl ShaderConfig {
    pub fn build(&self, world: &World) -> Box<dyn Shader> {
        match self {
            ShaderConfig::Silhouette(color) => Box::new(SilhouetteShader::new(*color)),
            ShaderConfig::Phong => Box::new(PointLightShader::from_world(world)),
        }
    }
}

/// Everything a scene file describes.
#[derive(Debug, Default)]
pub struct SceneConfig {
    pub world: World,
    pub camera: CameraConfig,
    pub shader: ShaderConfig,
}

#[derive(Debug, PartialEq)]
pub enum SceneParseError {
    YamlSyntaxError(String),
    MultipleDocuments,
    FileReadError(String),
    UnexpectedValue,
    MissingField(String),
    InvalidField(String),
    UnknownDefine(String),
    UnknownVariant(String),
    SingularTransformation(String),
    CyclicDefine(String),
    MultipleLights,
}

impl Display for SceneParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for SceneParseError {}

const PREDEFINED_DEFINES: &str = r#"
- define: PI
  value: 3.141592653589793
- define: FRAC_PI_2
  value: 1.5707963267948966
- define: FRAC_PI_3
  value: 1.0471975511965979
- define: FRAC_PI_4
  value: 0.7853981633974483
- define: FRAC_PI_6
  value: 0.5235987755982989
- define: FRAC_1_SQRT_2
  value: 0.7071067811865476

- define: WHITE
  value: [ 1, 1, 1 ]
- define: BLACK
  value: [ 0, 0, 0 ]
- define: RED
  value: [ 1, 0, 0 ]
- define: GREEN
  value: [ 0, 1, 0 ]
- define: BLUE
  value: [ 0, 0, 1 ]
"#;

type SceneParseResult<T> = Result<T, SceneParseError>;

macro_rules! parse_optional_field {
    ($self:ident, $yaml_body:ident, $builder:ident, $field:ident) => {
        match &$yaml_body[stringify!($field)] {
            &Yaml::BadValue => {}
            val => {
                $builder.$field($self.parse_num(val)?);
            }
        }
    };
}

/// Deepest chain of defines referring to other defines.
const MAX_DEFINE_DEPTH: usize = 64;

fn arity_error(kind: &str, expected: usize, got: usize) -> SceneParseError {
    SceneParseError::InvalidField(format!("`{kind}` takes {expected} values, got {got}"))
}

struct SceneParser {
    result: SceneConfig,
    defines: HashMap<String, Yaml>,
    define_depth: Cell<usize>,
}

impl SceneParser {
    fn new() -> Self {
        Self {
            result: SceneConfig::default(),
            defines: HashMap::new(),
            define_depth: Cell::new(0),
        }
    }

    fn with_predefined_defines() -> Self {
        let predefined = str_to_yaml(PREDEFINED_DEFINES).expect("predefined defines are valid");
        let mut parser = Self::new();
        parser
            .parse(&predefined)
            .expect("predefined defines are valid");
        parser
    }

    /// Parses the value of define `name` with `parse`.
    /// Nesting is bounded so that defines referring to themselves fail instead of recursing forever.
    fn with_define<T>(
        &self,
        name: &str,
        parse: impl FnOnce(&Yaml) -> SceneParseResult<T>,
    ) -> SceneParseResult<T> {
        let value = self
            .defines
            .get(name)
            .ok_or_else(|| SceneParseError::UnknownDefine(name.to_string()))?;

        let depth = self.define_depth.get();
        if depth >= MAX_DEFINE_DEPTH {
            return Err(SceneParseError::CyclicDefine(name.to_string()));
        }
        self.define_depth.set(depth + 1);
        let res = parse(value);
        self.define_depth.set(depth);
        res
    }

    fn parse_num(&self, value: &Yaml) -> SceneParseResult<f64> {
        match value {
            Yaml::Integer(value) => Ok(*value as f64),
            Yaml::Real(value) => value
                .parse()
                .map_err(|_| SceneParseError::InvalidField(format!("`{value}` is not a number"))),
            Yaml::String(name) => {
                if let Some(name) = name.strip_prefix('-') {
                    return self.parse_num(&Yaml::from_str(name)).map(|v| -v);
                }
                self.with_define(name, |v| self.parse_num(v))
            }
            other => Err(SceneParseError::InvalidField(format!(
                "expected a number, got {other:?}"
            ))),
        }
    }

    fn parse_size(&self, value: &Yaml, name: &str) -> SceneParseResult<usize> {
        let num = self.parse_num(value)?;
        if num < 1. || num.fract() != 0. {
            return Err(SceneParseError::InvalidField(format!(
                "`{name}` must be a positive integer, got {num}"
            )));
        }
        Ok(num as usize)
    }

    fn parse_vec3(&self, value: &Yaml) -> SceneParseResult<(f64, f64, f64)> {
        let vec = match value {
            Yaml::String(name) => return self.with_define(name, |v| self.parse_vec3(v)),
            Yaml::BadValue => return Err(SceneParseError::MissingField("[x, y, z]".to_string())),
            _ => value.as_vec().ok_or_else(|| {
                SceneParseError::InvalidField(format!("expected [x, y, z], got {value:?}"))
            })?,
        };
        if vec.len() != 3 {
            return Err(SceneParseError::InvalidField(format!(
                "expected 3 values, got {}",
                vec.len()
            )));
        }
        Ok((
            self.parse_num(&vec[0])?,
            self.parse_num(&vec[1])?,
            self.parse_num(&vec[2])?,
        ))
    }

    fn parse_point(&self, value: &Yaml) -> SceneParseResult<Point> {
        let (x, y, z) = self.parse_vec3(value)?;
        Ok(Point::new(x, y, z))
    }

    fn parse_color(&self, value: &Yaml) -> SceneParseResult<Color> {
        let (r, g, b) = self.parse_vec3(value)?;
        Ok(Color::new(r, g, b))
    }

    fn parse_light(&self, body: &Yaml) -> SceneParseResult<PointLight> {
        if body["at"].is_badvalue() {
            return Err(SceneParseError::MissingField("light `at`".to_string()));
        }
        if body["intensity"].is_badvalue() {
            return Err(SceneParseError::MissingField("light `intensity`".to_string()));
        }
        let at = self.parse_point(&body["at"])?;
        let intensity = self.parse_color(&body["intensity"])?;

        Ok(PointLight::new(at, intensity))
    }

    fn parse_material(&self, body: &Yaml) -> SceneParseResult<Material> {
        match body {
            Yaml::BadValue => return Ok(Material::default()),
            Yaml::String(name) => return self.with_define(name, |v| self.parse_material(v)),
            Yaml::Hash(_) => {}
            other => {
                return Err(SceneParseError::InvalidField(format!(
                    "expected a material, got {other:?}"
                )));
            }
        }
        let mut builder = MaterialBuilder::default();

        if !body["color"].is_badvalue() {
            builder.color(self.parse_color(&body["color"])?);
        }
        parse_optional_field!(self, body, builder, ambient);
        parse_optional_field!(self, body, builder, diffuse);
        parse_optional_field!(self, body, builder, specular);
        parse_optional_field!(self, body, builder, shininess);

        builder
            .build()
            .map_err(|err| SceneParseError::InvalidField(err.to_string()))
    }

    fn parse_transformation(&self, body: &Yaml) -> SceneParseResult<Transformation> {
        let values = body.as_vec().ok_or_else(|| {
            SceneParseError::InvalidField(format!("expected a transformation, got {body:?}"))
        })?;
        let kind = values
            .first()
            .ok_or_else(|| SceneParseError::MissingField("transformation kind".to_string()))?
            .as_str()
            .ok_or_else(|| SceneParseError::InvalidField("transformation kind".to_string()))?;
        let values = values[1..]
            .iter()
            .map(|v| self.parse_num(v))
            .collect::<SceneParseResult<Vec<f64>>>()?;

        match (kind, values.as_slice()) {
            ("translate", &[x, y, z]) => Ok(Transformation::Translation(x, y, z)),
            ("scale", &[x, y, z]) => Ok(Transformation::Scaling(x, y, z)),
            ("scale-uniform", &[f]) => Ok(Transformation::scaling_uniform(f)),
            ("rotate-x", &[rad]) => Ok(Transformation::Rotation(Axis::X, rad)),
            ("rotate-y", &[rad]) => Ok(Transformation::Rotation(Axis::Y, rad)),
            ("rotate-z", &[rad]) => Ok(Transformation::Rotation(Axis::Z, rad)),
            ("shear", &[xpy, xpz, ypx, ypz, zpx, zpy]) => {
                Ok(Transformation::Shearing(xpy, xpz, ypx, ypz, zpx, zpy))
            }
            ("translate" | "scale", _) => Err(arity_error(kind, 3, values.len())),
            ("scale-uniform" | "rotate-x" | "rotate-y" | "rotate-z", _) => {
                Err(arity_error(kind, 1, values.len()))
            }
            ("shear", _) => Err(arity_error(kind, 6, values.len())),
            _ => Err(SceneParseError::UnknownVariant(kind.to_string())),
        }
    }

    fn parse_transformations(&self, body: &Yaml) -> SceneParseResult<Vec<Transformation>> {
        match body {
            Yaml::BadValue => Ok(Vec::new()),
            Yaml::String(name) => self.with_define(name, |v| self.parse_transformations(v)),
            Yaml::Array(arr) => {
                let mut res = Vec::new();
                for val in arr {
                    match val {
                        Yaml::String(name) => {
                            res.extend(self.with_define(name, |v| self.parse_transformations(v))?)
                        }
                        _ => res.push(self.parse_transformation(val)?),
                    }
                }
                Ok(res)
            }
            other => Err(SceneParseError::InvalidField(format!(
                "expected a list of transformations, got {other:?}"
            ))),
        }
    }

    /// Folds the list into a matrix, rejecting transformations that cannot be undone.
    fn parse_object_transform(
        &self,
        body: &Yaml,
        owner: &str,
    ) -> SceneParseResult<ObjectTransform> {
        let matrix = Matrix::from(&self.parse_transformations(body)?[..]);
        ObjectTransform::try_new(matrix)
            .ok_or_else(|| SceneParseError::SingularTransformation(owner.to_string()))
    }

    fn parse_sphere(&self, body: &Yaml) -> SceneParseResult<Sphere> {
        let material = self.parse_material(&body["material"])?;
        let transform = self.parse_object_transform(&body["transform"], "sphere")?;
        Ok(Sphere::from_object_transform(transform, material))
    }

    fn parse_camera(&mut self, body: &Yaml) -> SceneParseResult<()> {
        if !body["width"].is_badvalue() {
            self.result.camera.width = self.parse_size(&body["width"], "width")?;
        }
        if !body["height"].is_badvalue() {
            self.result.camera.height = self.parse_size(&body["height"], "height")?;
        }
        let camera = &self.result.camera;
        CameraConfig::check_size(camera.width, camera.height)
            .map_err(SceneParseError::InvalidField)?;

        if !body["transform"].is_badvalue() {
            self.result.camera.transformation = self
                .parse_object_transform(&body["transform"], "camera")?
                .transformation()
                .clone();
        }
        Ok(())
    }

    fn parse_shader(&mut self, kind: Option<&str>, body: &Yaml) -> SceneParseResult<()> {
        let kind = kind
            .or_else(|| body["type"].as_str())
            .ok_or_else(|| SceneParseError::MissingField("shader `type`".to_string()))?;

        self.result.shader = match kind {
            "silhouette" => match &body["color"] {
                Yaml::BadValue => ShaderConfig::Silhouette(Color::red()),
                val => ShaderConfig::Silhouette(self.parse_color(val)?),
            },
            "phong" => ShaderConfig::Phong,
            _ => return Err(SceneParseError::UnknownVariant(kind.to_string())),
        };
        Ok(())
    }

    fn parse_add(&mut self, what: &str, body: &Yaml) -> SceneParseResult<()> {
        match what {
            "light" => {
                let light = self.parse_light(body)?;
                if !self.result.world.light_sources().is_empty() {
                    return Err(SceneParseError::MultipleLights);
                }
                self.result.world.add_light(light);
            }
            "sphere" => {
                let sphere = self.parse_sphere(body)?;
                self.result.world.add_shape(sphere);
            }
            _ => return Err(SceneParseError::UnknownVariant(what.to_string())),
        }
        Ok(())
    }

    fn parse_define(&mut self, name: &str, body: &Yaml) -> SceneParseResult<()> {
        if body.is_badvalue() {
            return Err(SceneParseError::MissingField(format!(
                "`value` of define `{name}`"
            )));
        }
        self.defines.insert(name.to_string(), body.clone());
        Ok(())
    }

    fn parse_operation(&mut self, yaml_obj: &Yaml) -> SceneParseResult<()> {
        let Yaml::Hash(hash) = yaml_obj else {
            return Err(SceneParseError::UnexpectedValue);
        };
        match hash.front() {
            Some((Yaml::String(operation), Yaml::String(what))) => match operation.as_str() {
                "add" => self.parse_add(what, yaml_obj),
                "define" => self.parse_define(what, &yaml_obj["value"]),
                "shader" => self.parse_shader(Some(what), yaml_obj),
                "camera" => self.parse_camera(yaml_obj),
                _ => {
                    warn!("ignoring unknown scene operation `{operation}`");
                    Ok(())
                }
            },
            Some((Yaml::String(operation), Yaml::Null)) => match operation.as_str() {
                "camera" => self.parse_camera(yaml_obj),
                "shader" => self.parse_shader(None, yaml_obj),
                _ => {
                    warn!("ignoring unknown scene operation `{operation}`");
                    Ok(())
                }
            },
            _ => Err(SceneParseError::UnexpectedValue),
        }
    }

    fn parse(&mut self, yaml: &Yaml) -> SceneParseResult<()> {
        let operations = match yaml {
            Yaml::Array(operations) => operations,
            Yaml::BadValue | Yaml::Null => return Ok(()),
            _ => return Err(SceneParseError::UnexpectedValue),
        };
        for yaml_obj in operations {
            self.parse_operation(yaml_obj)?;
        }
        Ok(())
    }
}

fn str_to_yaml(source: &str) -> SceneParseResult<Yaml> {
    let mut docs = Yaml::load_from_str(source)
        .map_err(|err| SceneParseError::YamlSyntaxError(err.to_string()))?;
    match docs.len() {
        1 => Ok(std::mem::replace(&mut docs[0], Yaml::BadValue)),
        0 => Ok(Yaml::Array(vec![])),
        _ => Err(SceneParseError::MultipleDocuments),
    }
}

pub fn parse_str(source: &str) -> SceneParseResult<SceneConfig> {
    let yaml = str_to_yaml(source)?;
    let mut parser = SceneParser::with_predefined_defines();
    parser.parse(&yaml)?;

    let result = parser.result;
    debug!(
        "parsed scene with {} shapes and {} lights",
        result.world.shapes().len(),
        result.world.light_sources().len()
    );
    Ok(result)
}

pub fn parse_file(path: &Path) -> SceneParseResult<SceneConfig> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        SceneParseError::FileReadError(format!("failed to read `{}`: {err}", path.display()))
    })?;
    parse_str(&source)
}
