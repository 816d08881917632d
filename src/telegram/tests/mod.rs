mod weather_reports_tests;
