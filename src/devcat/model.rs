use std::fmt;

/// The closed set of device shapes a catalog can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Phone,
    Laptop,
}

impl Variant {
    /// Type tag used on the wire and in listings.
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Phone => "Smartphone",
            Variant::Laptop => "Laptop",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Smartphone" => Some(Variant::Phone),
            "Laptop" => Some(Variant::Laptop),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Variant-specific payload of a [`Device`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    Phone { os: String, memory_gb: u32 },
    Laptop { screen_inches: f64, battery_wh: u32 },
}

impl DeviceKind {
    pub fn variant(&self) -> Variant {
        match self {
            DeviceKind::Phone { .. } => Variant::Phone,
            DeviceKind::Laptop { .. } => Variant::Laptop,
        }
    }
}

/// One catalog entry.
///
/// Shared fields live on the struct, the variant payload in [`DeviceKind`].
/// Only `price` and `model` can be replaced after construction; `apps` is
/// append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    brand: String,
    model: String,
    price: f64,
    apps: Vec<String>,
    kind: DeviceKind,
}

impl Device {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        apps: Vec<String>,
        kind: DeviceKind,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            apps,
            kind,
        }
    }

    pub fn phone(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        apps: Vec<String>,
        os: impl Into<String>,
        memory_gb: u32,
    ) -> Self {
        Self::new(
            brand,
            model,
            price,
            apps,
            DeviceKind::Phone {
                os: os.into(),
                memory_gb,
            },
        )
    }

    pub fn laptop(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        apps: Vec<String>,
        screen_inches: f64,
        battery_wh: u32,
    ) -> Self {
        Self::new(
            brand,
            model,
            price,
            apps,
            DeviceKind::Laptop {
                screen_inches,
                battery_wh,
            },
        )
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn apps(&self) -> &[String] {
        &self.apps
    }

    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// Phone operating system, `None` for other variants.
    pub fn os(&self) -> Option<&str> {
        match &self.kind {
            DeviceKind::Phone { os, .. } => Some(os),
            DeviceKind::Laptop { .. } => None,
        }
    }

    /// Phone memory in GB, `None` for other variants.
    pub fn memory_gb(&self) -> Option<u32> {
        match self.kind {
            DeviceKind::Phone { memory_gb, .. } => Some(memory_gb),
            DeviceKind::Laptop { .. } => None,
        }
    }

    /// Laptop screen diagonal in inches, `None` for other variants.
    pub fn screen_inches(&self) -> Option<f64> {
        match self.kind {
            DeviceKind::Laptop { screen_inches, .. } => Some(screen_inches),
            DeviceKind::Phone { .. } => None,
        }
    }

    /// Laptop battery capacity in Wh, `None` for other variants.
    pub fn battery_wh(&self) -> Option<u32> {
        match self.kind {
            DeviceKind::Laptop { battery_wh, .. } => Some(battery_wh),
            DeviceKind::Phone { .. } => None,
        }
    }

    pub fn has_app(&self, name: &str) -> bool {
        self.apps.iter().any(|app| app == name)
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn add_app(&mut self, app: impl Into<String>) {
        self.apps.push(app.into());
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Brand: {}, Model: {}, Price: ${:.2}, Apps: {}",
            self.variant(),
            self.brand,
            self.model,
            self.price,
            self.apps.join(" ")
        )?;
        match &self.kind {
            DeviceKind::Phone { os, memory_gb } => {
                write!(f, "\n  OS: {}, Memory: {}GB", os, memory_gb)
            }
            DeviceKind::Laptop {
                screen_inches,
                battery_wh,
            } => write!(
                f,
                "\n  Screen: {}\", Battery: {}Wh",
                screen_inches, battery_wh
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Device {
        Device::phone(
            "Google",
            "Pixel 8",
            699.0,
            vec!["Maps".into()],
            "Android",
            8,
        )
    }

    #[test]
    fn variant_accessors_return_none_for_other_variant() {
        let phone = pixel();
        assert_eq!(phone.os(), Some("Android"));
        assert_eq!(phone.memory_gb(), Some(8));
        assert_eq!(phone.screen_inches(), None);
        assert_eq!(phone.battery_wh(), None);

        let laptop = Device::laptop("Dell", "XPS 15", 1899.0, vec![], 15.6, 86);
        assert_eq!(laptop.os(), None);
        assert_eq!(laptop.memory_gb(), None);
        assert_eq!(laptop.screen_inches(), Some(15.6));
        assert_eq!(laptop.battery_wh(), Some(86));
    }

    #[test]
    fn mutators_change_only_their_field() {
        let mut phone = pixel();
        phone.set_price(599.0);
        phone.set_model("Pixel 8a");
        phone.add_app("Camera");

        assert_eq!(phone.price(), 599.0);
        assert_eq!(phone.model(), "Pixel 8a");
        assert_eq!(phone.apps(), ["Maps", "Camera"]);
        assert_eq!(phone.brand(), "Google");
        assert_eq!(phone.memory_gb(), Some(8));
    }

    #[test]
    fn add_app_keeps_duplicates_in_order() {
        let mut phone = pixel();
        phone.add_app("Maps");
        assert_eq!(phone.apps(), ["Maps", "Maps"]);
        assert!(phone.has_app("Maps"));
        assert!(!phone.has_app("maps"));
    }

    #[test]
    fn tags_map_to_variants() {
        assert_eq!(Variant::from_tag("Smartphone"), Some(Variant::Phone));
        assert_eq!(Variant::from_tag("Laptop"), Some(Variant::Laptop));
        assert_eq!(Variant::from_tag("Tablet"), None);
        assert_eq!(Variant::Phone.tag(), "Smartphone");
    }

    #[test]
    fn display_shows_variant_details() {
        let text = pixel().to_string();
        assert!(text.starts_with("[Smartphone] Brand: Google, Model: Pixel 8, Price: $699.00"));
        assert!(text.contains("OS: Android, Memory: 8GB"));

        let laptop = Device::laptop("Dell", "XPS 15", 1899.5, vec![], 15.6, 86);
        assert!(laptop.to_string().contains("Screen: 15.6\", Battery: 86Wh"));
    }
}
