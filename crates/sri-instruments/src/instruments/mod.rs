pub mod bsas_brief;
pub mod kiss9_shame;
pub mod mosher_guilt;
pub mod mosher_guilt_full;
pub mod sexual_cognition;
pub mod sis_ses_adapted;
pub mod sis_ses_full;
pub mod sis_ses_sf;
pub mod sos_full;
pub mod sos_screening;
pub mod teen_sexual_attitudes;
