/// Application settings and drawing toggles
use anyhow::Context as _;
use spin3d_core::{Shape, SpinConfig};

/// A part of the figure that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Vertex,
    Edge,
    Inner,
    Face,
    Center,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Vertex,
        Component::Edge,
        Component::Inner,
        Component::Face,
        Component::Center,
    ];

    /// Key that toggles the component.
    pub fn key(self) -> char {
        match self {
            Component::Vertex => 'v',
            Component::Edge => 'e',
            Component::Inner => 'i',
            Component::Face => 'f',
            Component::Center => 'c',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::Vertex => "vertex",
            Component::Edge => "edge",
            Component::Inner => "inner",
            Component::Face => "face",
            Component::Center => "center",
        }
    }
}

/// Which components are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    pub vertex: bool,
    pub edge: bool,
    pub inner: bool,
    pub face: bool,
    pub center: bool,
}

impl Components {
    pub fn none() -> Self {
        Self {
            vertex: false,
            edge: false,
            inner: false,
            face: false,
            center: false,
        }
    }

    pub fn all() -> Self {
        Self {
            vertex: true,
            edge: true,
            inner: true,
            face: true,
            center: true,
        }
    }

    pub fn enabled(&self, component: Component) -> bool {
        match component {
            Component::Vertex => self.vertex,
            Component::Edge => self.edge,
            Component::Inner => self.inner,
            Component::Face => self.face,
            Component::Center => self.center,
        }
    }

    pub fn toggle(&mut self, component: Component) {
        let flag = match component {
            Component::Vertex => &mut self.vertex,
            Component::Edge => &mut self.edge,
            Component::Inner => &mut self.inner,
            Component::Face => &mut self.face,
            Component::Center => &mut self.center,
        };
        *flag = !*flag;
    }
}

impl Default for Components {
    fn default() -> Self {
        Self {
            vertex: false,
            edge: false,
            inner: true,
            face: true,
            center: true,
        }
    }
}

/// Terminal app configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub shape: Shape,
    /// Half the edge length of the figure, in figure units.
    pub scale: f64,
    pub spin: SpinConfig,
    pub components: Components,
}

impl AppConfig {
    /// Read `[shape] [scale]` from command line arguments (program name
    /// already skipped). Missing values keep their defaults.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(shape) = args.next() {
            config.shape = shape.parse()?;
        }
        if let Some(scale) = args.next() {
            config.scale = scale
                .parse()
                .with_context(|| format!("invalid scale {scale:?}"))?;
        }
        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument {extra:?}");
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Tetrahedron,
            scale: 200.0,
            spin: SpinConfig::default(),
            components: Components::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_components() {
        let components = Components::default();
        assert!(components.inner && components.face && components.center);
        assert!(!components.vertex && !components.edge);
    }

    #[test]
    fn test_toggle() {
        let mut components = Components::default();
        components.toggle(Component::Vertex);
        components.toggle(Component::Face);
        assert!(components.enabled(Component::Vertex));
        assert!(!components.enabled(Component::Face));
        components.toggle(Component::Vertex);
        assert!(!components.vertex);
    }

    #[test]
    fn test_keys() {
        for component in Component::ALL {
            assert_eq!(Component::from_key(component.key()), Some(component));
        }
        assert_eq!(Component::from_key('f'), Some(Component::Face));
        assert_eq!(Component::from_key('x'), None);
    }

    #[test]
    fn test_from_args() {
        let config = AppConfig::from_args(args(&[])).unwrap();
        assert_eq!(config.shape, Shape::Tetrahedron);
        assert_eq!(config.scale, 200.0);

        let config = AppConfig::from_args(args(&["cube", "150"])).unwrap();
        assert_eq!(config.shape, Shape::Cube);
        assert_eq!(config.scale, 150.0);

        assert!(AppConfig::from_args(args(&["sphere"])).is_err());
        assert!(AppConfig::from_args(args(&["cube", "big"])).is_err());
        assert!(AppConfig::from_args(args(&["cube", "1", "2"])).is_err());
    }
}
