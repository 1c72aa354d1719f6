//! Static office catalog and catalog file loading

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::models::{Office, OfficeCategory};

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate office id: {0}")]
    DuplicateId(String),

    #[error("Catalog contains no offices")]
    Empty,
}

/// Every service label offered somewhere in the network
pub const ALL_SERVICES: [&str; 6] = [
    "Atención al Cliente",
    "Trámites Administrativos",
    "Consultas",
    "Pagos",
    "Información General",
    "Trámites Básicos",
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    offices: Vec<Office>,
}

#[allow(clippy::too_many_arguments)]
fn office(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    region: &str,
    (latitude, longitude): (f64, f64),
    category: OfficeCategory,
    phone: &str,
    services: &[&str],
) -> Office {
    Office {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        latitude,
        longitude,
        category,
        services: services.iter().map(|s| s.to_string()).collect(),
        phone: Some(phone.to_string()),
        email: None,
        description: None,
    }
}

/// The built-in catalog of thirteen Bolivian offices
pub fn bolivian_offices() -> Vec<Office> {
    use OfficeCategory::*;

    let mut la_paz = office(
        "1",
        "Oficina Central La Paz",
        "Av. Mariscal Santa Cruz 1351",
        "La Paz",
        "La Paz",
        (-16.5000, -68.1193),
        Central,
        "+591 2 2201234",
        &["Atención al Cliente", "Trámites Administrativos", "Consultas", "Pagos", "Información General"],
    );
    la_paz.email = Some("lapaz@empresa.bo".to_string());
    la_paz.description = Some("Oficina principal y sede administrativa".to_string());

    let mut santa_cruz = office(
        "4",
        "Oficina Regional Santa Cruz",
        "Av. San Martín 123, Equipetrol",
        "Santa Cruz de la Sierra",
        "Santa Cruz",
        (-17.7833, -63.1821),
        Central,
        "+591 3 3345678",
        &["Atención al Cliente", "Trámites Administrativos", "Consultas", "Pagos", "Información General"],
    );
    santa_cruz.email = Some("santacruz@empresa.bo".to_string());
    santa_cruz.description = Some("Oficina regional para el oriente boliviano".to_string());

    let mut cochabamba = office(
        "6",
        "Oficina Regional Cochabamba",
        "Av. Heroínas 456, Centro",
        "Cochabamba",
        "Cochabamba",
        (-17.3895, -66.1568),
        Central,
        "+591 4 4234567",
        &["Atención al Cliente", "Trámites Administrativos", "Consultas", "Pagos"],
    );
    cochabamba.email = Some("cochabamba@empresa.bo".to_string());

    vec![
        la_paz,
        office(
            "2",
            "Sucursal Sopocachi",
            "Av. 20 de Octubre 2463",
            "La Paz",
            "La Paz",
            (-16.5069, -68.1310),
            Branch,
            "+591 2 2442567",
            &["Atención al Cliente", "Consultas", "Pagos"],
        ),
        office(
            "3",
            "Agencia El Alto",
            "Av. Juan Pablo II, Ciudad Satélite",
            "El Alto",
            "La Paz",
            (-16.5040, -68.1640),
            Agency,
            "+591 2 2843456",
            &["Atención al Cliente", "Trámites Básicos", "Pagos"],
        ),
        santa_cruz,
        office(
            "5",
            "Sucursal Plan 3000",
            "Av. Santos Dumont, Plan 3000",
            "Santa Cruz de la Sierra",
            "Santa Cruz",
            (-17.7539, -63.1656),
            Branch,
            "+591 3 3567890",
            &["Atención al Cliente", "Consultas", "Pagos"],
        ),
        cochabamba,
        office(
            "7",
            "Punto de Atención Quillacollo",
            "Plaza Principal, Quillacollo",
            "Quillacollo",
            "Cochabamba",
            (-17.3922, -66.2781),
            ServicePoint,
            "+591 4 4345678",
            &["Consultas", "Información General"],
        ),
        office(
            "8",
            "Oficina Sucre",
            "Calle Estudiantes 789, Centro Histórico",
            "Sucre",
            "Chuquisaca",
            (-19.0196, -65.2619),
            Branch,
            "+591 4 6456789",
            &["Atención al Cliente", "Trámites Básicos", "Consultas"],
        ),
        office(
            "9",
            "Agencia Potosí",
            "Calle Bolívar 321, Centro",
            "Potosí",
            "Potosí",
            (-19.5723, -65.7550),
            Agency,
            "+591 2 6234567",
            &["Atención al Cliente", "Consultas", "Pagos"],
        ),
        office(
            "10",
            "Sucursal Oruro",
            "Av. 6 de Agosto 654",
            "Oruro",
            "Oruro",
            (-17.9647, -67.1069),
            Branch,
            "+591 2 5345678",
            &["Atención al Cliente", "Trámites Básicos", "Consultas"],
        ),
        office(
            "11",
            "Oficina Tarija",
            "Calle Ingavi 987, Centro",
            "Tarija",
            "Tarija",
            (-21.5355, -64.7296),
            Branch,
            "+591 4 6567890",
            &["Atención al Cliente", "Trámites Administrativos", "Consultas", "Pagos"],
        ),
        office(
            "12",
            "Punto de Atención Trinidad",
            "Plaza José Ballivián, Trinidad",
            "Trinidad",
            "Beni",
            (-14.8336, -64.8999),
            ServicePoint,
            "+591 3 4623456",
            &["Consultas", "Información General"],
        ),
        office(
            "13",
            "Punto de Atención Cobija",
            "Av. Internacional, Cobija",
            "Cobija",
            "Pando",
            (-11.0267, -68.7692),
            ServicePoint,
            "+591 3 8423456",
            &["Consultas", "Información General"],
        ),
    ]
}

/// Load a catalog from a `.toml` (`[[offices]]` tables) or `.json` (array) file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Office>, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let offices = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str::<CatalogFile>(&contents)?.offices,
        Some("json") => serde_json::from_str::<Vec<Office>>(&contents)?,
        other => {
            return Err(CatalogError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            ))
        }
    };

    validate_catalog(&offices)?;
    tracing::info!("Loaded {} offices from {}", offices.len(), path.display());
    Ok(offices)
}

/// Reject empty catalogs and duplicate ids
pub fn validate_catalog(offices: &[Office]) -> Result<(), CatalogError> {
    if offices.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for office in offices {
        if !seen.insert(office.id.as_str()) {
            return Err(CatalogError::DuplicateId(office.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let offices = bolivian_offices();

        assert_eq!(offices.len(), 13);
        assert!(validate_catalog(&offices).is_ok());
        for office in &offices {
            for service in &office.services {
                assert!(ALL_SERVICES.contains(&service.as_str()), "unknown service {}", service);
            }
        }
    }

    #[test]
    fn test_la_paz_region() {
        let ids: Vec<_> = bolivian_offices()
            .into_iter()
            .filter(|o| o.region == "La Paz")
            .map(|o| o.id)
            .collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_load_toml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[offices]]
id = "a"
name = "Sucursal Sopocachi"
address = "Av. 20 de Octubre 2463"
city = "La Paz"
department = "La Paz"
latitude = -16.5069
longitude = -68.1310
type = "sucursal"
services = ["Pagos"]
"#
        )
        .unwrap();

        let offices = load_catalog(file.path()).unwrap();

        assert_eq!(offices.len(), 1);
        assert_eq!(offices[0].category, OfficeCategory::Branch);
    }

    #[test]
    fn test_load_json_rejects_duplicates() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let office = serde_json::to_value(&bolivian_offices()[0]).unwrap();
        write!(file, "{}", serde_json::json!([office.clone(), office])).unwrap();

        let err = load_catalog(file.path()).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(validate_catalog(&[]), Err(CatalogError::Empty)));
    }
}
