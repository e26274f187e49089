//! Static product catalog.

use std::fmt;

/// Non-negative price in céntimos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S/ {}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A product shown on the home tab. Read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
}

const fn item(name: &'static str, cents: u32, description: &'static str) -> CatalogItem {
    CatalogItem {
        name,
        price: Price::from_cents(cents),
        description,
    }
}

/// The fixed product list.
pub const CATALOG: [CatalogItem; 20] = [
    item("Arena aglomerante para gatos - 5 kg", 3990, "Control de olores y fácil limpieza"),
    item("Comida seca para gatitos 1.5 kg", 4550, "Formulada para crecimiento y energía"),
    item("Comida húmeda (lata) - sabor atún", 420, "Rica en proteínas, ideal como complemento"),
    item("Snack dental para gatos - 60 g", 1200, "Cuida la higiene bucal"),
    item("Rascador poste (mediano)", 7990, "Evita daños en muebles"),
    item("Cama para gato - tamaño pequeño", 5500, "Acolchada y lavable"),
    item("Juguete pluma con varita", 950, "Estimulación y ejercicio"),
    item("Arenero cerrado con tapa", 12999, "Mayor privacidad y menos olor"),
    item("Bol comedero antideslizante", 1990, "Ideal para agua y comida"),
    item("Cepillo para pelo corto", 1450, "Reduce pelo suelto y bolas de pelo"),
    item("Transportadora para gatos (pequeña)", 8990, "Segura y cómoda para viajes"),
    item("Collar con campana ajustable", 850, "Identificación y seguridad"),
    item("Fuente de agua automática 2L", 12900, "Agua fresca constante"),
    item("Arena desechable para viajes (pack)", 2490, "Uso temporal y práctico"),
    item("Spray repelente para muebles", 1800, "Protege tus muebles favoritos"),
    item("Caja de arena biodegradable - 10L", 4990, "Ecológica y absorbente"),
    item("Pasta de malta para bolas de pelo", 1190, "Facilita expulsión de bolas de pelo"),
    item("Cinturón arnés para paseo", 3900, "Paseos cortos con seguridad"),
    item("Cascada de juguete interactivo", 5990, "Entretenimiento durante horas"),
    item("Kit de aseo básico (tijeras + cortaúñas)", 2250, "Mantenimiento en casa"),
];
