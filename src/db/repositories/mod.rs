pub mod eye_health;
