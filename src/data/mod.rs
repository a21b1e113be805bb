//! Built-in sample listings used when no dataset file is configured.

use crate::models::{
    Address, Agent, Coordinates, ListingType, Property, PropertyImage, PropertyType,
};
use chrono::{DateTime, TimeZone, Utc};

fn listed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn address(street: &str, suburb: &str, city: &str, province: &str, postal_code: &str) -> Address {
    Address {
        street: street.to_string(),
        suburb: suburb.to_string(),
        city: city.to_string(),
        province: province.to_string(),
        postal_code: postal_code.to_string(),
        country: "South Africa".to_string(),
    }
}

fn gallery(id: &str, count: u32) -> Vec<PropertyImage> {
    (1..=count)
        .map(|order| PropertyImage {
            url: format!("https://images.property-finder.example/{id}/{order}.jpg"),
            alt: format!("{id} photo {order}"),
            is_primary: order == 1,
            order,
        })
        .collect()
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|f| f.to_string()).collect()
}

fn sarah_johnson() -> Agent {
    Agent {
        id: "agent-001".to_string(),
        name: "Sarah Johnson".to_string(),
        email: "sarah.johnson@highveldrealty.co.za".to_string(),
        phone: "+27 11 555 0101".to_string(),
        agency: "Highveld Realty".to_string(),
        bio: Some("Fifteen years selling family homes across northern Johannesburg.".to_string()),
        profile_image: Some("https://images.property-finder.example/agents/agent-001.jpg".to_string()),
    }
}

fn michael_van_der_merwe() -> Agent {
    Agent {
        id: "agent-002".to_string(),
        name: "Michael van der Merwe".to_string(),
        email: "michael@capecoastproperties.co.za".to_string(),
        phone: "+27 21 555 0202".to_string(),
        agency: "Cape Coast Properties".to_string(),
        bio: Some("Rentals and sectional title specialist on the Atlantic Seaboard.".to_string()),
        profile_image: None,
    }
}

fn thandi_nkosi() -> Agent {
    Agent {
        id: "agent-003".to_string(),
        name: "Thandi Nkosi".to_string(),
        email: "thandi.nkosi@jacarandahomes.co.za".to_string(),
        phone: "+27 12 555 0303".to_string(),
        agency: "Jacaranda Homes".to_string(),
        bio: None,
        profile_image: Some("https://images.property-finder.example/agents/agent-003.jpg".to_string()),
    }
}

/// The sample marketplace inventory.
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-001".to_string(),
            title: "Modern Family Home in Sandton".to_string(),
            description: "Spacious four bedroom home with an entertainment area, heated pool and landscaped garden close to Sandton City.".to_string(),
            price: 2_850_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::House,
            listing_type: ListingType::ForSale,
            bedrooms: 4,
            bathrooms: 3,
            garages: 2,
            square_meters: Some(320),
            erf_size: Some(800),
            address: address("12 Rivonia Road", "Sandton", "Johannesburg", "Gauteng", "2196"),
            coordinates: Some(Coordinates { lat: -26.1076, lng: 28.0567 }),
            images: gallery("prop-001", 4),
            features: features(&["Pool", "Garden", "Security", "Double Garage"]),
            agent: sarah_johnson(),
            date_added: listed(2024, 3, 10),
            date_updated: listed(2024, 3, 12),
            is_active: true,
            is_featured: true,
            views: 245,
        },
        Property {
            id: "prop-002".to_string(),
            title: "Sea Point Apartment with Ocean Views".to_string(),
            description: "Renovated two bedroom apartment on the promenade with a sunny balcony and secure parking.".to_string(),
            price: 15_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::Apartment,
            listing_type: ListingType::ToRent,
            bedrooms: 2,
            bathrooms: 2,
            garages: 1,
            square_meters: Some(95),
            erf_size: None,
            address: address("8 Beach Road", "Sea Point", "Cape Town", "Western Cape", "8005"),
            coordinates: Some(Coordinates { lat: -33.9180, lng: 18.3830 }),
            images: gallery("prop-002", 3),
            features: features(&["Sea View", "Balcony", "Pet Friendly"]),
            agent: michael_van_der_merwe(),
            date_added: listed(2024, 3, 18),
            date_updated: listed(2024, 3, 18),
            is_active: true,
            is_featured: true,
            views: 189,
        },
        Property {
            id: "prop-003".to_string(),
            title: "Secure Townhouse in Waterkloof".to_string(),
            description: "Three bedroom townhouse in a quiet complex with a private garden and 24 hour security.".to_string(),
            price: 1_750_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::Townhouse,
            listing_type: ListingType::ForSale,
            bedrooms: 3,
            bathrooms: 2,
            garages: 2,
            square_meters: Some(180),
            erf_size: Some(300),
            address: address("45 Albert Street", "Waterkloof", "Pretoria", "Gauteng", "0181"),
            coordinates: Some(Coordinates { lat: -25.7805, lng: 28.2436 }),
            images: gallery("prop-003", 3),
            features: features(&["Garden", "Security", "Pet Friendly"]),
            agent: thandi_nkosi(),
            date_added: listed(2024, 2, 28),
            date_updated: listed(2024, 3, 5),
            is_active: true,
            is_featured: false,
            views: 97,
        },
        Property {
            id: "prop-004".to_string(),
            title: "Umhlanga Beachfront Flat".to_string(),
            description: "Lock-up-and-go flat a short walk from the lighthouse, with a communal pool and sea views.".to_string(),
            price: 1_450_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::Flat,
            listing_type: ListingType::ForSale,
            bedrooms: 2,
            bathrooms: 1,
            garages: 1,
            square_meters: Some(78),
            erf_size: None,
            address: address("3 Lagoon Drive", "Umhlanga", "Durban", "KwaZulu-Natal", "4319"),
            coordinates: Some(Coordinates { lat: -29.7265, lng: 31.0849 }),
            images: gallery("prop-004", 2),
            features: features(&["Sea View", "Pool"]),
            agent: michael_van_der_merwe(),
            date_added: listed(2024, 1, 20),
            date_updated: listed(2024, 2, 1),
            is_active: true,
            is_featured: false,
            views: 64,
        },
        Property {
            id: "prop-005".to_string(),
            title: "Vacant Stand in the Stellenbosch Winelands".to_string(),
            description: "Level stand with mountain views in a new estate, ready to build.".to_string(),
            price: 950_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::VacantLand,
            listing_type: ListingType::ForSale,
            bedrooms: 0,
            bathrooms: 0,
            garages: 0,
            square_meters: None,
            erf_size: Some(1_200),
            address: address("Erf 1142 Vineyard Lane", "Paradyskloof", "Stellenbosch", "Western Cape", "7600"),
            coordinates: None,
            images: gallery("prop-005", 1),
            features: features(&["Mountain View"]),
            agent: michael_van_der_merwe(),
            date_added: listed(2023, 12, 5),
            date_updated: listed(2023, 12, 5),
            is_active: true,
            is_featured: false,
            views: 31,
        },
        Property {
            id: "prop-006".to_string(),
            title: "Rosebank Office Suite".to_string(),
            description: "Open plan A-grade office space with boardroom, fibre and backup power near the Gautrain.".to_string(),
            price: 45_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::Office,
            listing_type: ListingType::ToRent,
            bedrooms: 0,
            bathrooms: 2,
            garages: 4,
            square_meters: Some(250),
            erf_size: None,
            address: address("20 Baker Street", "Rosebank", "Johannesburg", "Gauteng", "2196"),
            coordinates: Some(Coordinates { lat: -26.1452, lng: 28.0437 }),
            images: gallery("prop-006", 2),
            features: features(&["Backup Power", "Security", "Fibre"]),
            agent: sarah_johnson(),
            date_added: listed(2024, 3, 1),
            date_updated: listed(2024, 3, 1),
            is_active: true,
            is_featured: false,
            views: 12,
        },
        Property {
            id: "prop-007".to_string(),
            title: "Karoo Sheep Farm".to_string(),
            description: "Working farm with a restored homestead, boreholes and solar power outside Graaff-Reinet.".to_string(),
            price: 6_500_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::Farm,
            listing_type: ListingType::Sold,
            bedrooms: 5,
            bathrooms: 3,
            garages: 3,
            square_meters: Some(450),
            erf_size: Some(2_500_000),
            address: address("Farm Rietfontein 12", "Graaff-Reinet", "Graaff-Reinet", "Eastern Cape", "6280"),
            coordinates: Some(Coordinates { lat: -32.2522, lng: 24.5308 }),
            images: gallery("prop-007", 3),
            features: features(&["Borehole", "Solar", "Garden"]),
            agent: thandi_nkosi(),
            date_added: listed(2023, 11, 12),
            date_updated: listed(2024, 1, 30),
            is_active: true,
            is_featured: false,
            views: 58,
        },
        Property {
            id: "prop-008".to_string(),
            title: "Camps Bay Villa".to_string(),
            description: "Withdrawn listing: five bedroom villa with infinity pool overlooking the Twelve Apostles.".to_string(),
            price: 12_500_000,
            currency: "ZAR".to_string(),
            property_type: PropertyType::House,
            listing_type: ListingType::ForSale,
            bedrooms: 5,
            bathrooms: 5,
            garages: 3,
            square_meters: Some(520),
            erf_size: Some(1_100),
            address: address("7 Victoria Road", "Camps Bay", "Cape Town", "Western Cape", "8005"),
            coordinates: Some(Coordinates { lat: -33.9510, lng: 18.3775 }),
            images: gallery("prop-008", 5),
            features: features(&["Pool", "Sea View", "Security"]),
            agent: michael_van_der_merwe(),
            date_added: listed(2024, 2, 2),
            date_updated: listed(2024, 2, 20),
            is_active: false,
            is_featured: true,
            views: 410,
        },
    ]
}
